// tests/rover_missions.rs
use glam::IVec2;
use rover_fleet::{Axis, ConstructionError, Heading, Rover, RoverError};

fn setup(pose: &str) -> Rover {
    Rover::new("BumbleBee", pose, "5 5").unwrap()
}

#[test]
fn test_left_loop_returns_one_cell_north() {
    let mut rover = setup("1 2 N");

    // Four L+M pairs walk a unit square back to (1, 2, N), the final M steps north.
    let result = rover.execute_instruction_sentence("LMLMLMLMM").unwrap();

    assert_eq!(result, "1 3 N");
    assert_eq!(rover.pose().position, IVec2::new(1, 3));
    assert_eq!(rover.heading(), Heading::North);
}

#[test]
fn test_zigzag_ends_on_the_x_edge() {
    let mut rover = setup("3 3 E");

    // M M -> (5,3) on the X edge, R -> S, M M -> (5,1), R -> W, M -> (4,1),
    // R R -> E, M -> (5,1) back on the edge.
    let result = rover.execute_instruction_sentence("MMRMMRMRRM").unwrap();

    assert_eq!(result, "5 1 E");
}

#[test]
fn test_corner_rover_cannot_leave_the_grid() {
    let mut rover = setup("5 5 N");

    let err = rover.execute_instruction_sentence("MMM").unwrap_err();

    assert_eq!(
        err,
        RoverError::Boundary {
            axis: Axis::Y,
            value: 6,
            edge: 5
        }
    );
    assert_eq!(rover.initial_coordinate(), "5 5 N", "pose must be untouched");
}

#[test]
fn test_applied_steps_survive_a_later_failure() {
    let mut rover = setup("1 1 N");

    // R and M succeed, then `x` fails; nothing is rolled back.
    let err = rover.execute_instruction_sentence("RMxM").unwrap_err();

    assert_eq!(err, RoverError::InvalidInstruction("x".into()));
    assert_eq!(rover.initial_coordinate(), "2 1 E");
}

#[test]
fn test_lower_edge_is_enforced() {
    let mut rover = setup("0 1 S");

    rover.execute_instruction_sentence("M").unwrap();
    let err = rover.execute_instruction_sentence("M").unwrap_err();

    assert!(matches!(err, RoverError::Boundary { axis: Axis::Y, value: -1, .. }));
    assert_eq!(rover.position(), IVec2::new(0, 0));
}

#[test]
fn test_moving_onto_the_edge_reports_once() {
    let mut rover = setup("1 4 N");

    let reached = rover.move_forward().unwrap();
    assert_eq!(reached.map(|r| r.axis), Some(Axis::Y));

    // Turning along the edge does not report again.
    assert_eq!(rover.execute('R').unwrap(), None);
    assert_eq!(rover.execute('M').unwrap(), None);
}

#[test]
fn test_stored_instructions_run_like_a_sentence() {
    let mut stored = setup("1 2 N");
    let mut direct = setup("1 2 N");

    stored.set_instructions("LMLMLMLMM").unwrap();
    assert_eq!(stored.pending_instructions(), "LMLMLMLMM");

    assert_eq!(
        stored.execute_instructions().unwrap(),
        direct.execute_instruction_sentence("LMLMLMLMM").unwrap()
    );
}

#[test]
fn test_no_stored_instructions_reports_current_pose() {
    let mut rover = setup("2 2 W");
    assert_eq!(rover.execute_instructions().unwrap(), "2 2 W");
}

#[test]
fn test_construction_rejects_bad_input() {
    let cases = [
        ("b", "1 2 N", "5 5", ConstructionError::IdentifierTooShort),
        ("ab", "1 2 N", "5 5", ConstructionError::IdentifierTooShort),
        (
            "aaaaaaaaaaaaaaaaaaaaa",
            "1 2 N",
            "5 5",
            ConstructionError::IdentifierTooLong,
        ),
        (
            "aaaaaaaaaaaaaaaaaaaa",
            "1 2 N",
            "5 5",
            ConstructionError::IdentifierTooLong,
        ),
        (
            "BumbleBee",
            "1 2 C",
            "5 5",
            ConstructionError::InvalidHeading("C".into()),
        ),
        ("BumbleBee", "1 A N", "5 5", ConstructionError::NonNumericAxis),
        ("BumbleBee", "A 2 N", "5 5", ConstructionError::NonNumericAxis),
        ("BumbleBee", "1 2 N", "A 5", ConstructionError::NonNumericAxis),
        ("BumbleBee", "1 2 N", "5 A", ConstructionError::NonNumericAxis),
        ("BumbleBee", "1 2 N", "5", ConstructionError::NonNumericAxis),
        ("BumbleBee", "1.5 2 N", "5 5", ConstructionError::NonNumericAxis),
        (
            "BumbleBee",
            "6 1 N",
            "5 5",
            ConstructionError::InitialPositionOutOfBounds,
        ),
        (
            "BumbleBee",
            "1 6 N",
            "5 5",
            ConstructionError::InitialPositionOutOfBounds,
        ),
        (
            "BumbleBee",
            "-1 0 N",
            "5 5",
            ConstructionError::NegativeInitialPosition,
        ),
        ("BumbleBee", "0 0 N", "0 1", ConstructionError::NonPositiveEdge),
        ("BumbleBee", "0 0 N", "1 0", ConstructionError::NonPositiveEdge),
    ];

    for (id, pose, edges, expected) in cases {
        let err = Rover::new(id, pose, edges).unwrap_err();
        assert_eq!(err, expected, "{id:?} / {pose:?} / {edges:?}");
    }
}

#[test]
fn test_first_failing_rule_wins() {
    // Bad heading and a too-short identifier: the heading rule is checked first.
    assert_eq!(
        Rover::new("b", "1 2 X", "5 5").unwrap_err(),
        ConstructionError::InvalidHeading("X".into())
    );
    // A missing heading is reported as an invalid heading too.
    assert_eq!(
        Rover::new("BumbleBee", "1 2", "5 5").unwrap_err(),
        ConstructionError::InvalidHeading(String::new())
    );
    assert_eq!(
        Rover::new("BumbleBee", "1 2 N", "5 5").unwrap().initial_coordinate(),
        "1 2 N"
    );
}

#[test]
fn test_identifier_bounds_are_exclusive() {
    assert!(Rover::new("abc", "0 0 N", "1 1").is_ok());
    assert!(Rover::new("a".repeat(19), "0 0 N", "1 1").is_ok());
}

#[test]
fn test_pose_tokens_split_on_any_whitespace() {
    let rover = Rover::new("BumbleBee", "  1\t2   N ", "5\t5").unwrap();
    assert_eq!(rover.initial_coordinate(), "1 2 N");
}

#[test]
fn test_rover_snapshot_serializes() {
    let mut rover = setup("1 2 N");
    rover.set_instructions("LM").unwrap();

    let json = serde_json::to_value(&rover).unwrap();

    assert_eq!(json["identifier"], "BumbleBee");
    assert_eq!(json["pose"]["heading"], "N");
    assert_eq!(json["pending"], serde_json::json!(["L", "M"]));
}
