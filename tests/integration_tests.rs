use chrono::{DateTime, Utc};
use schedule_codec::{
    Schedule, TimeOfDay, codec, from_base64, to_base64, validate_schedule,
};

/// Helper function to create a fully populated record with a fixed timestamp
fn create_test_schedule() -> Schedule {
    let created = DateTime::parse_from_rfc3339("2025-11-24T06:00:00Z")
        .unwrap()
        .with_timezone(&Utc);
    let mut schedule = Schedule::new_at(
        "CrossFit WOD",
        3,
        TimeOfDay::new(18, 0),
        TimeOfDay::new(19, 30),
        created,
    );
    schedule.description = Some("Interval training".to_string());
    schedule.at = Some("Main hall".to_string());
    schedule.instructor = Some("Tomasz Nowosielski".to_string());
    schedule.location = Some("Rzeszów, Poland".to_string());
    schedule
}

#[test]
fn test_validate_encode_transport_decode_pipeline() {
    // Arrange
    let schedule = create_test_schedule();

    // Act
    validate_schedule(&schedule).unwrap();
    let bytes = codec::encode(&schedule).unwrap();
    let text = to_base64(&bytes);
    let decoded = codec::decode(&from_base64(&text).unwrap()).unwrap();

    // Assert
    assert_eq!(decoded.title, schedule.title);
    assert_eq!(decoded.description, schedule.description);
    assert_eq!(decoded.at, schedule.at);
    assert_eq!(decoded.instructor, schedule.instructor);
    assert_eq!(decoded.location, schedule.location);
    assert_eq!(decoded.week, schedule.week);
    assert_eq!(decoded.from.total_seconds(), schedule.from.total_seconds());
    assert_eq!(decoded.to.total_seconds(), schedule.to.total_seconds());
}

#[test]
fn test_transport_text_is_url_safe() {
    // Arrange
    let schedule = create_test_schedule();

    // Act
    let text = to_base64(&codec::encode(&schedule).unwrap());

    // Assert
    assert!(!text.contains('+'));
    assert!(!text.contains('/'));
}

#[test]
fn test_known_frame_bytes() {
    // Arrange
    let schedule = Schedule::new("Math", 2, TimeOfDay::new(9, 0), TimeOfDay::new(10, 0));

    // Act
    let bytes = codec::encode(&schedule).unwrap();

    // Assert
    let mut expected = Vec::new();
    expected.extend_from_slice(b"Math\x00");
    expected.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // four absent text fields
    expected.push(0x02);
    expected.extend_from_slice(&[0x40, 0x7E, 0x00, 0x00]); // 32400 seconds
    expected.extend_from_slice(&[0x10, 0x8C, 0x00, 0x00]); // 36000 seconds
    assert_eq!(bytes, expected);
}

#[test]
fn test_decode_is_not_a_full_record_round_trip() {
    // Arrange
    let mut schedule = create_test_schedule();
    schedule.id = 17;
    schedule.series = Some("winter".to_string());
    schedule.notifiable = false;
    schedule.enabled = false;

    // Act
    let decoded = codec::decode(&codec::encode(&schedule).unwrap()).unwrap();

    // Assert
    assert_eq!(decoded.id, 0);
    assert_eq!(decoded.series, None);
    assert!(decoded.notifiable);
    assert!(decoded.enabled);
    assert_ne!(decoded, schedule);
}

#[test]
fn test_decode_rejects_truncated_transport_text() {
    // Arrange
    let schedule = Schedule::new("Math", 2, TimeOfDay::new(9, 0), TimeOfDay::new(10, 0));
    let bytes = codec::encode(&schedule).unwrap();

    // Act
    let truncated = from_base64(&to_base64(&bytes[..9])).unwrap();

    // Assert
    assert!(codec::decode(&truncated).is_err());
}

#[test]
fn test_schedule_serializes_to_json() {
    // Arrange
    let schedule = create_test_schedule();

    // Act
    let json = serde_json::to_string(&schedule).unwrap();
    let parsed: Schedule = serde_json::from_str(&json).unwrap();

    // Assert
    assert!(json.contains(r#""title":"CrossFit WOD""#));
    assert_eq!(parsed, schedule);
}
