use sepush_api::types::{
    AllowanceResponse, AreaInformation, AreasResponse, StatusResponse, TopicsResponse,
};
use sepush_api::{handle_response, parse_as, RawResponse};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn payload(name: &str) -> serde_json::Value {
    handle_response(Some(RawResponse::new(200, load_fixture(name)))).unwrap()
}

#[test]
fn deserialize_allowance() {
    let resp: AllowanceResponse = parse_as(payload("allowance.json")).unwrap();
    assert_eq!(resp.allowance.count, 39);
    assert_eq!(resp.allowance.limit, 50);
    assert_eq!(resp.allowance.allowance_type, "daily");
    assert_eq!(resp.allowance.remaining(), 11);
}

#[test]
fn deserialize_status() {
    let resp: StatusResponse = parse_as(payload("status.json")).unwrap();
    assert_eq!(resp.status.len(), 2);

    let eskom = resp.eskom().unwrap();
    assert_eq!(eskom.name, "National");
    assert_eq!(eskom.stage_number(), Some(0));
    assert_eq!(eskom.next_stages.len(), 1);
    assert_eq!(eskom.next_stages[0].stage, "2");
    assert_eq!(
        eskom.next_stages[0].stage_start_timestamp.to_rfc3339(),
        "2022-08-08T16:00:00+02:00"
    );

    let cape_town = &resp.status["capetown"];
    assert_eq!(cape_town.next_stages.len(), 2);
}

#[test]
fn deserialize_areas_search() {
    let resp: AreasResponse = parse_as(payload("areas_search.json")).unwrap();
    assert_eq!(resp.areas.len(), 1);
    assert_eq!(resp.areas[0].id, "stellenbosch_esko_direct");
    assert_eq!(resp.areas[0].count, None);
}

#[test]
fn deserialize_areas_nearby() {
    let resp: AreasResponse = parse_as(payload("areas_nearby.json")).unwrap();
    assert_eq!(resp.areas.len(), 4);
    assert_eq!(resp.areas[0].count, Some(-1));
    assert_eq!(
        resp.areas[0].region.as_deref(),
        Some("Eskom Direct, City of Johannesburg, Gauteng")
    );
}

#[test]
fn deserialize_area_information() {
    let resp: AreaInformation = parse_as(payload("area.json")).unwrap();
    assert_eq!(resp.info.name, "Beverley (10)");
    assert_eq!(resp.events.len(), 1);
    assert_eq!(resp.events[0].note, "Stage 2");
    assert!(resp.events[0].start < resp.events[0].end);

    let day = &resp.schedule.days[0];
    assert_eq!(day.date.to_string(), "2022-08-08");
    assert!(day.windows_for_stage(0).is_empty());
    assert!(day.windows_for_stage(1).is_empty());
    assert_eq!(day.windows_for_stage(2), ["20:00-22:30"]);
    assert_eq!(day.windows_for_stage(4).len(), 3);
    assert!(day.windows_for_stage(8).is_empty());
}

#[test]
fn deserialize_topics() {
    let resp: TopicsResponse = parse_as(payload("topics_nearby.json")).unwrap();
    assert_eq!(resp.topics.len(), 2);
    assert_eq!(resp.topics[0].category, "electricity");
    assert_eq!(resp.topics[0].followers, 1);
    assert!((resp.topics[1].distance - 3.48).abs() < f64::EPSILON);
}

#[test]
fn wrong_shape_is_unexpected() {
    let err = parse_as::<TopicsResponse>(payload("allowance.json")).unwrap_err();
    assert_eq!(err.kind(), sepush_api::ErrorKind::Unexpected);
}
