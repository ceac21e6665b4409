use super::*;
use crate::helpers::*;

#[test]
fn can_read_small_problem() {
    let problem = create_small_problem();

    assert_eq!(problem.node_count(), 4);
    assert_eq!(problem.route_count(), 3);

    let vehicles = problem.vehicles();
    assert_eq!(vehicles.len(), 2);
    assert_eq!((vehicles[0].home, vehicles[0].start_time, vehicles[0].capacity), (0, 0, 10));
    assert_eq!((vehicles[1].home, vehicles[1].start_time, vehicles[1].capacity), (3, 5, 8));
    assert!(vehicles[0].can_carry(0) && vehicles[0].can_carry(1) && !vehicles[0].can_carry(2));
    assert!(!vehicles[1].can_carry(0) && vehicles[1].can_carry(1) && vehicles[1].can_carry(2));

    let call = problem.call(1);
    assert_eq!((call.origin, call.destination, call.size, call.penalty), (1, 3, 6, 700));
    assert_eq!(call.pickup, TimeWindow::new(5, 40));
    assert_eq!(call.delivery, TimeWindow::new(20, 100));

    let trip = problem.trip(1, 3, 0).expect("no trip");
    assert_eq!((trip.time, trip.cost), (15, 60));
    assert!(problem.trip(2, 0, 0).is_none());

    let handling = problem.handling(0, 1).expect("no handling");
    assert_eq!((handling.pickup_time, handling.pickup_cost, handling.delivery_time, handling.delivery_cost), (2, 12, 2, 12));
    assert!(problem.handling(1, 0).is_none());
}

#[test]
fn can_read_problem_from_string() {
    let text = create_small_text_with(0, "");

    let problem = text.read_pdptw().unwrap();

    assert_eq!(problem.calls().len(), 3);
}

parameterized_test! {can_reject_malformed_instance, (line, replacement, expected), {
    can_reject_malformed_instance_impl(line, replacement, expected);
}}

can_reject_malformed_instance! {
    case_01_data_before_section: (1, "4", "unexpected data before the first section at line 1"),
    case_02_vehicle_fields: (6, "1,1,0", "expected 4 fields, got 3 in vehicles section at line 6: '1,1,0'"),
    case_03_vehicle_home: (6, "1,5,0,10", "node index 5 is out of range 1..=4 in vehicles section at line 6: '1,5,0,10'"),
    case_04_vehicle_order: (7, "1,4,5,8", "expected vehicle index 2, got 1 in vehicles section at line 7: '1,4,5,8'"),
    case_05_vehicle_count: (4, "3", "expected 3 records in vehicles section at line 5, got 2"),
    case_06_permitted_call: (11, "1,1,4", "call index 4 is out of range 1..=3 in permitted calls section at line 11: '1,1,4'"),
    case_07_bad_number: (14, "1,1,3,x,500,0,50,10,80", "cannot parse calls section at line 14: '1,1,3,x,500,0,50,10,80'"),
    case_08_window: (16, "3,3,1,3,400,30,0,0,60", "time window start is after its end in calls section at line 16: '3,3,1,3,400,30,0,0,60'"),
    case_09_negative_size: (16, "3,3,1,-3,400,0,30,0,60", "size cannot be negative in calls section at line 16: '3,3,1,-3,400,0,30,0,60'"),
    case_10_trip_vehicle: (18, "3,1,1,0,0", "vehicle index 3 is out of range 1..=2 in trips section at line 18: '3,1,1,0,0'"),
    case_11_handling_call: (54, "2,4,1,8,1,8", "call index 4 is out of range 1..=3 in handlings section at line 54: '2,4,1,8,1,8'"),
    case_12_handling_fields: (55, "7", "expected 6 fields, got 1 in handlings section at line 55: '7'"),
    case_13_count: (2, "-4", "count cannot be negative in node count section at line 2: '-4'"),
}

fn can_reject_malformed_instance_impl(line: usize, replacement: &str, expected: &str) {
    let result = create_small_text_with(line, replacement).read_pdptw();

    assert_eq!(result.err().map(|err| err.to_string()), Some(expected.to_string()));
}

#[test]
fn can_reject_missing_sections() {
    let result = "% nodes\n4\n% vehicles\n0\n".to_string().read_pdptw();

    assert_eq!(result.err().map(|err| err.to_string()), Some("missing vehicles section".to_string()));
}

#[test]
fn can_reject_data_after_last_section() {
    let text = format!("{}\n% extra\n1,2", create_small_text_with(0, ""));

    let result = text.read_pdptw();

    assert_eq!(result.err().map(|err| err.to_string()), Some("unexpected data after handlings section at line 56".to_string()));
}

#[test]
fn can_read_problem_without_calls() {
    let text = "% nodes\n2\n% vehicles\n1\n% vehicles\n1,1,0,10\n% calls\n0\n% permitted\n1\n% calls\n% trips\n1,1,2,3,4\n% handlings\n% EOF\n";

    let problem = text.to_string().read_pdptw().unwrap();

    assert!(problem.calls().is_empty());
    assert_eq!(problem.route_count(), 2);
    assert_eq!(problem.trip(0, 0, 1).map(|trip| trip.cost), Some(4));
}

fn create_section(records: &[&str]) -> TextSection {
    TextSection { line: 3, records: records.iter().enumerate().map(|(idx, text)| (idx + 4, text.to_string())).collect() }
}

#[test]
fn can_parse_records_borrowing_section_text() {
    let section = create_section(&["1, 2,3", "4,5 ,6,"]);

    let records = parse_records(&section, "trips").unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].values, vec![1, 2, 3]);
    assert_eq!(records[1].values, vec![4, 5, 6]);
    assert_eq!((records[1].section, records[1].line, records[1].text), ("trips", 5, "4,5 ,6,"));
}

#[test]
fn can_parse_fixed_records_checking_fields_and_count() {
    let section = create_section(&["1,2", "3,4"]);

    assert_eq!(parse_fixed_records(&section, "vehicles", 2, Some(2)).unwrap().len(), 2);
    assert_eq!(parse_fixed_records(&section, "vehicles", 2, None).unwrap().len(), 2);
    assert_eq!(
        parse_fixed_records(&section, "vehicles", 3, None).err().map(|err| err.to_string()),
        Some("expected 3 fields, got 2 in vehicles section at line 4: '1,2'".to_string())
    );
    assert_eq!(
        parse_fixed_records(&section, "vehicles", 2, Some(1)).err().map(|err| err.to_string()),
        Some("expected 1 records in vehicles section at line 3, got 2".to_string())
    );
}
