//! In-process stand-ins for the generation service.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::constellation::ConstellationRequest;

const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Clone)]
pub enum StubBehaviour {
    /// Build a ring of satellites from the request parameters.
    Generate,
    /// Always answer with this body.
    Fixed(Value),
    /// Always answer with this status and no body.
    Status(u16),
    /// Answer 200 with a body that is not a constellation.
    Garbage,
}

pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub async fn stub_service(behaviour: StubBehaviour) -> String {
    let router = Router::new()
        .route("/constellation", post(constellation))
        .route("/health", get(health))
        .with_state(behaviour);
    serve(router).await
}

/// A URL nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn three_point_body() -> Value {
    json!({
        "name": "Triangle",
        "satellites": [
            {"name": "SAT-1", "altitude_km": 550, "inclination_deg": 53, "raan_deg": 0,
             "true_anomaly_deg": 0, "x": 0.0, "y": 0.0},
            {"name": "SAT-2", "altitude_km": 550, "inclination_deg": 53, "raan_deg": 0,
             "true_anomaly_deg": 120, "x": 1.0, "y": 0.0},
            {"name": "SAT-3", "altitude_km": 550, "inclination_deg": 53, "raan_deg": 0,
             "true_anomaly_deg": 240, "x": 0.0, "y": 1.0}
        ]
    })
}

async fn constellation(
    State(behaviour): State<StubBehaviour>,
    Json(request): Json<ConstellationRequest>,
) -> Response {
    match behaviour {
        StubBehaviour::Generate => Json(generate(&request)).into_response(),
        StubBehaviour::Fixed(body) => Json(body).into_response(),
        StubBehaviour::Status(code) => StatusCode::from_u16(code).unwrap().into_response(),
        StubBehaviour::Garbage => "<html>upstream exploded</html>".into_response(),
    }
}

async fn health(State(behaviour): State<StubBehaviour>) -> Response {
    match behaviour {
        StubBehaviour::Status(code) => StatusCode::from_u16(code).unwrap().into_response(),
        _ => Json(json!({"status": "ok"})).into_response(),
    }
}

fn generate(request: &ConstellationRequest) -> Value {
    let radius = EARTH_RADIUS_KM + request.altitude_km;
    let mut satellites = Vec::new();
    for plane in 0..request.planes {
        let raan = plane as f64 * 360.0 / request.planes as f64;
        for slot in 0..request.sats_per_plane {
            let anomaly = slot as f64 * 360.0 / request.sats_per_plane as f64;
            let theta = anomaly.to_radians();
            satellites.push(json!({
                "name": format!("SAT-{}", satellites.len() + 1),
                "altitude_km": request.altitude_km,
                "inclination_deg": request.inclination_deg,
                "raan_deg": raan,
                "true_anomaly_deg": anomaly,
                "x": radius * theta.cos(),
                "y": radius * theta.sin(),
            }));
        }
    }
    json!({ "name": request.name, "satellites": satellites })
}
