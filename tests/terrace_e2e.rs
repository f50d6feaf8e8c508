use actix_web::{test, web, App};
use terrace::{
    api::{json_config, routes::configure, state::AppState},
    config::AppConfig,
};

fn build_app() -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = AppState::new(AppConfig::default()).expect("default config is valid");
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .configure(configure)
}

fn full_layout(rows: usize, cols: usize) -> serde_json::Value {
    serde_json::json!({
        "rows": rows,
        "cols": cols,
        "grid": vec![vec![true; cols]; rows],
    })
}

fn kinds(body: &serde_json::Value) -> Vec<String> {
    body["payload"]["violations"]
        .as_array()
        .unwrap_or(&vec![])
        .iter()
        .filter_map(|v| v["kind"].as_str().map(String::from))
        .collect()
}

fn event(event: serde_json::Value) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/terrace/events")
        .set_json(event)
}

// ---------------------------------------------------------------------------
// Scenario A: a single 1x1 crop on a fully plantable 3x3 terrace is valid
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_single_crop_fits() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/placements/validate")
        .set_json(serde_json::json!({
            "terraceLayout": full_layout(3, 3),
            "crops": [{ "name": "Tomato", "width": 1, "height": 1 }],
            "placements": [{ "cropName": "Tomato", "position": { "row": 0, "col": 0 } }]
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"]["valid"], true);
    assert!(kinds(&body).is_empty(), "No violations expected, got {:?}", kinds(&body));
    assert_eq!(body["payload"]["accepted"].as_array().map(|a| a.len()), Some(1));
}

// ---------------------------------------------------------------------------
// Scenario B: two 1x1 crops on the same tile give exactly one overlap
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_two_crops_same_tile() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/placements/validate")
        .set_json(serde_json::json!({
            "terraceLayout": full_layout(3, 3),
            "crops": [
                { "name": "Tomato", "width": 1, "height": 1 },
                { "name": "Basil", "width": 1, "height": 1 }
            ],
            "placements": [
                { "cropName": "Tomato", "position": { "row": 1, "col": 1 } },
                { "cropName": "Basil", "position": { "row": 1, "col": 1 } }
            ]
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(kinds(&body), vec!["overlap"]);
    let overlap = &body["payload"]["violations"][0];
    assert_eq!(overlap["cropA"], "Tomato");
    assert_eq!(overlap["cropB"], "Basil");
    assert_eq!(overlap["row"], 1);
    assert_eq!(overlap["col"], 1);

    // The earlier placement survives, the later one is dropped.
    let accepted = body["payload"]["accepted"].as_array().expect("accepted list");
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0]["cropName"], "Tomato");
}

// ---------------------------------------------------------------------------
// Scenario C: a 2x2 footprint at (1,1) on a 2x2 terrace runs off the edge
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_footprint_out_of_bounds() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/placements/validate")
        .set_json(serde_json::json!({
            "terraceLayout": full_layout(2, 2),
            "crops": [{ "name": "Pumpkin", "width": 2, "height": 2 }],
            "placements": [{ "cropName": "Pumpkin", "position": { "row": 1, "col": 1 } }]
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(kinds(&body), vec!["outOfBounds"]);
    assert_eq!(body["payload"]["violations"][0]["cropName"], "Pumpkin");
}

// ---------------------------------------------------------------------------
// Scenario D: a placement for a crop that was never recommended
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_unknown_crop() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/placements/validate")
        .set_json(serde_json::json!({
            "terraceLayout": full_layout(3, 3),
            "crops": [{ "name": "Tomato", "width": 1, "height": 1 }],
            "placements": [{ "cropName": "Okra", "position": { "row": 0, "col": 0 } }]
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(kinds(&body), vec!["unknownCrop"]);
    assert_eq!(body["payload"]["violations"][0]["cropName"], "Okra");
}

// ---------------------------------------------------------------------------
// A negative position rejects that placement alone, not the whole batch
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_negative_position_is_a_violation() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/placements/validate")
        .set_json(serde_json::json!({
            "terraceLayout": full_layout(3, 3),
            "crops": [
                { "name": "Tomato", "width": 1, "height": 1 },
                { "name": "Basil", "width": 1, "height": 1 }
            ],
            "placements": [
                { "cropName": "Tomato", "position": { "row": 0, "col": 0 } },
                { "cropName": "Basil", "position": { "row": -1, "col": 2 } }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["payload"]["valid"], false);
    assert_eq!(kinds(&body), vec!["invalidPosition"]);
    assert_eq!(body["payload"]["violations"][0]["placement"], 1);

    let accepted = body["payload"]["accepted"].as_array().expect("accepted list");
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0]["cropName"], "Tomato");
}

// ---------------------------------------------------------------------------
// Two footprints that only meet past the edge still overlap
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_overlap_outside_the_terrace() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/placements/validate")
        .set_json(serde_json::json!({
            "terraceLayout": full_layout(2, 2),
            "crops": [
                { "name": "Pumpkin", "width": 2, "height": 2 },
                { "name": "Mint", "width": 1, "height": 1 }
            ],
            "placements": [
                { "cropName": "Pumpkin", "position": { "row": 1, "col": 1 } },
                { "cropName": "Mint", "position": { "row": 2, "col": 2 } }
            ]
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(kinds(&body), vec!["outOfBounds", "outOfBounds", "overlap"]);
    let overlap = &body["payload"]["violations"][2];
    assert_eq!(overlap["first"], 0);
    assert_eq!(overlap["second"], 1);
    assert_eq!(overlap["row"], 2);
    assert_eq!(overlap["col"], 2);
}

// ---------------------------------------------------------------------------
// Scenario E: paint a bed, resize, then validate against the painted terrace
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_paint_resize_and_validate() {
    let app = test::init_service(build_app()).await;

    let resize = test::TestRequest::put()
        .uri("/api/terrace/dimensions")
        .set_json(serde_json::json!({ "rows": 6, "cols": 6 }))
        .to_request();
    let resp = test::call_service(&app, resize).await;
    assert_eq!(resp.status(), 200);

    // A 2x3 bed in the top-left corner, drawn in one stroke.
    test::call_service(
        &app,
        event(serde_json::json!({ "type": "start", "row": 0, "col": 0 })).to_request(),
    )
    .await;
    for (row, col) in [(0, 1), (0, 2), (1, 2), (1, 1), (1, 0)] {
        test::call_service(
            &app,
            event(serde_json::json!({ "type": "move", "row": row, "col": col })).to_request(),
        )
        .await;
    }
    let end = event(serde_json::json!({ "type": "end" })).to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, end).await;
    assert_eq!(body["payload"]["plantableTiles"], 6);

    // Shrinking to 2x2 keeps only the overlap of the bed.
    let shrink = test::TestRequest::put()
        .uri("/api/terrace/dimensions")
        .set_json(serde_json::json!({ "rows": 2, "cols": 2 }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, shrink).await;
    assert_eq!(body["payload"]["plantableTiles"], 4);

    // Growing back never restores the discarded column.
    let grow = test::TestRequest::put()
        .uri("/api/terrace/dimensions")
        .set_json(serde_json::json!({ "rows": 6, "cols": 6 }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, grow).await;
    assert_eq!(body["payload"]["plantableTiles"], 4);
    assert_eq!(body["payload"]["grid"][0][2], false);

    let validate = test::TestRequest::post()
        .uri("/api/placements/validate")
        .set_json(serde_json::json!({
            "crops": [
                { "name": "Zucchini", "width": 2, "height": 2 },
                { "name": "Chili", "width": 0.5, "height": 1 }
            ],
            "placements": [
                { "cropName": "Zucchini", "position": { "row": 0, "col": 0 } },
                { "cropName": "Chili", "position": { "row": 0, "col": 2 } }
            ]
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, validate).await;
    assert_eq!(kinds(&body), vec!["unplantableTile"]);
    assert_eq!(body["payload"]["violations"][0]["cropName"], "Chili");
    let accepted = body["payload"]["accepted"].as_array().expect("accepted list");
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0]["cropName"], "Zucchini");
}

// ---------------------------------------------------------------------------
// Scenario F: erase stroke undoes a draw stroke over the same cells
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_draw_then_erase() {
    let app = test::init_service(build_app()).await;
    let path = [(3, 3), (3, 4), (4, 4)];

    for tool in ["draw", "erase"] {
        let switch = test::TestRequest::put()
            .uri("/api/terrace/tool")
            .set_json(serde_json::json!({ "tool": tool }))
            .to_request();
        let resp = test::call_service(&app, switch).await;
        assert_eq!(resp.status(), 200);

        let (first, rest) = path.split_first().expect("non-empty path");
        let start = serde_json::json!({ "type": "start", "row": first.0, "col": first.1 });
        test::call_service(&app, event(start).to_request()).await;
        for (row, col) in rest {
            test::call_service(
                &app,
                event(serde_json::json!({ "type": "move", "row": row, "col": col })).to_request(),
            )
            .await;
        }
        let end = event(serde_json::json!({ "type": "end" })).to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, end).await;
        let expected = if tool == "draw" { path.len() } else { 0 };
        assert_eq!(body["payload"]["plantableTiles"], expected, "after {tool} stroke");
    }
}
