use mealdb_client::{ClientError, parse_listing};

#[test]
fn test_parse_fixture_listing() {
    let content = std::fs::read_to_string("tests/fixtures/listing.json").unwrap();

    let meals = parse_listing(&content).unwrap();
    assert_eq!(meals.len(), 3);

    // Order on the wire is preserved
    assert_eq!(meals[0].id, "52940");
    assert_eq!(meals[0].name, "Brown Stew Chicken");
    assert_eq!(
        meals[0].thumbnail_url,
        "https://www.themealdb.com/images/media/meals/sypxpx1515365095.jpg"
    );
    assert_eq!(meals[1].name, "Chicken & mushroom Hotpot");
    assert_eq!(meals[2].name, "Chicken Alfredo Primavera");
}

#[test]
fn test_extra_wire_fields_are_ignored() {
    let body = r#"{
        "meals": [
            {
                "idMeal": "1",
                "strMeal": "Chicken Curry",
                "strMealThumb": "https://example.test/1.jpg",
                "strCategory": "Chicken",
                "strArea": "Indian"
            }
        ]
    }"#;

    let meals = parse_listing(body).unwrap();
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].name, "Chicken Curry");
}

#[test]
fn test_null_meals_is_malformed() {
    // TheMealDB answers {"meals": null} for an unknown filter; that must not
    // pass as a successful empty listing.
    let err = parse_listing(r#"{"meals": null}"#).unwrap_err();
    assert!(matches!(err, ClientError::MalformedResponse));
}

#[test]
fn test_missing_meals_field_is_malformed() {
    let err = parse_listing(r#"{"drinks": []}"#).unwrap_err();
    assert!(matches!(err, ClientError::MalformedResponse));
}

#[test]
fn test_invalid_json_is_rejected() {
    let err = parse_listing("<html>502 Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, ClientError::Json(_)));
}

#[test]
fn test_empty_listing_is_valid() {
    // An explicitly empty array is a normal (if unusual) success case.
    let meals = parse_listing(r#"{"meals": []}"#).unwrap();
    assert!(meals.is_empty());
}
