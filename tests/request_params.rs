use crossword_api_data::model::{Difficulty, GenerateRequest, GridSize, Theme};

#[test]
fn only_set_parameters_are_emitted() {
    let request = GenerateRequest {
        size: Some(GridSize::Small),
        theme: None,
        difficulty: Some(Difficulty::Hard),
    };
    assert_eq!(
        request.to_query_params(),
        vec![("size", "small".to_string()), ("difficulty", "hard".to_string())]
    );

    assert!(GenerateRequest::default().to_query_params().is_empty());
}

#[test]
fn parameter_vocabulary_round_trips_through_strings() {
    assert_eq!("medium".parse::<GridSize>().unwrap(), GridSize::Medium);
    assert_eq!(" Large ".parse::<GridSize>().unwrap(), GridSize::Large);
    assert_eq!("geography".parse::<Theme>().unwrap(), Theme::Geography);
    assert_eq!(Theme::Geography.to_string(), "geography");
    assert_eq!("EASY".parse::<Difficulty>().unwrap(), Difficulty::Easy);

    let err = "gigantic".parse::<GridSize>().unwrap_err();
    assert!(err.to_string().contains("gigantic"), "got: {err}");
}

#[test]
fn requests_serialize_without_unset_parameters() {
    let request = GenerateRequest {
        size: Some(GridSize::Large),
        theme: Some(Theme::Animals),
        difficulty: None,
    };
    let encoded = serde_json::to_string(&request).unwrap();
    assert_eq!(encoded, r#"{"size":"large","theme":"animals"}"#);

    let decoded: GenerateRequest = serde_json::from_str(r#"{"size":"large"}"#).unwrap();
    assert_eq!(decoded.size, Some(GridSize::Large));
    assert_eq!(decoded.theme, None);
}
