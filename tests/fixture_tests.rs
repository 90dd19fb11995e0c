use cricket_live::Error;
use cricket_live::fixtures::FixtureStore;
use serde_json::json;

fn document() -> serde_json::Value {
    json!({
        "teams": [
            { "id": "zim", "name": "Zimbabwe", "shortName": "ZIM", "color": "#D40000", "logo": "/logos/zim.svg" },
            { "id": "dur", "name": "Durham", "shortName": "DUR", "color": "#5B2C83", "logo": "/logos/dur.svg" }
        ],
        "players": [
            { "id": "zim-muzarabani", "name": "Blessing Muzarabani", "teamId": "zim", "role": "bowler", "nationality": "Zimbabwean" },
            { "id": "dur-lees", "name": "Alex Lees", "teamId": "dur", "role": "batter", "nationality": "English" }
        ],
        "matches": [{
            "id": "zim-durham", "title": "Durham vs Zimbabwe", "format": "First-class", "status": "live",
            "venue": "Riverside Ground", "startTime": "2025-05-15T10:00:00Z",
            "home": { "teamId": "dur", "name": "Durham" }, "away": { "teamId": "zim", "name": "Zimbabwe" }
        }],
        "innings": [{
            "id": "i2", "matchId": "zim-durham", "number": 2, "teamId": "dur",
            "batting": [{ "playerId": "dur-lees", "name": "Alex Lees" }],
            "bowling": [{ "playerId": "zim-muzarabani", "name": "Blessing Muzarabani", "overs": "1" }]
        }],
        "balls": [
            { "inningsId": "i2", "number": { "over": 0, "ball": 1 }, "batsmanId": "dur-lees", "bowlerId": "zim-muzarabani" },
            { "inningsId": "i2", "number": { "over": 0, "ball": 1 }, "batsmanId": "dur-lees", "bowlerId": "zim-muzarabani", "runs": 1, "extra": "wide" },
            { "inningsId": "i2", "number": { "over": 0, "ball": 2 }, "batsmanId": "dur-lees", "bowlerId": "zim-muzarabani" }
        ]
    })
}

fn rejection(doc: serde_json::Value) -> String {
    match FixtureStore::from_json(&doc.to_string()) {
        Err(Error::Fixture(msg)) => msg,
        other => panic!("expected a fixture rejection, got {other:?}"),
    }
}

#[test]
fn accepts_a_consistent_document() {
    let store = FixtureStore::from_json(&document().to_string()).expect("valid document");
    assert_eq!(store.balls_for_innings("i2").count(), 3);
    assert!(store.live_state("zim-durham").is_none());
}

#[test]
fn rejects_player_with_unknown_team() {
    let mut doc = document();
    doc["players"][1]["teamId"] = json!("yorkshire");
    assert!(rejection(doc).contains("dur-lees references unknown team yorkshire"));
}

#[test]
fn rejects_innings_for_a_team_not_in_the_match() {
    let mut doc = document();
    doc["teams"].as_array_mut().unwrap().push(json!({
        "id": "eng", "name": "England", "shortName": "ENG", "color": "#1C2C5B", "logo": "/logos/eng.svg"
    }));
    doc["innings"][0]["teamId"] = json!("eng");
    assert!(rejection(doc).contains("is batted by eng"));
}

#[test]
fn rejects_bowler_from_the_batting_side() {
    let mut doc = document();
    doc["innings"][0]["bowling"][0]["playerId"] = json!("dur-lees");
    assert!(rejection(doc).contains("dur-lees as a bowler for the wrong side"));
}

#[test]
fn rejects_balls_out_of_order() {
    let mut doc = document();
    doc["balls"][2]["number"] = json!({ "over": 0, "ball": 0 });
    assert!(rejection(doc).contains("ball 0.0 in innings i2 comes after 0.1"));
}

#[test]
fn malformed_json_is_a_decode_error() {
    assert!(matches!(FixtureStore::from_json("{\"teams\": 3}"), Err(Error::Decode { .. })));
}
