use crate::router::Route;

#[test]
fn test_parse_known_routes() {
    assert_eq!(Route::parse("/"), Route::Landing);
    assert_eq!(Route::parse("/auth"), Route::Auth);
    assert_eq!(Route::parse("/auth/"), Route::Auth);
    assert_eq!(
        Route::parse("/hackathon/hack2024/team"),
        Route::Team { hackathon_id: "hack2024".to_string() }
    );
    assert_eq!(Route::parse(" /hackathon/42/team/ "), Route::team("42"));
}

#[test]
fn test_parse_unknown_routes() {
    for path in ["auth", "/login", "/hackathon//team", "/hackathon/x", "/hackathon/x/team/extra"] {
        assert_eq!(Route::parse(path), Route::NotFound(path.trim().to_string()), "{:?}", path);
    }
}

#[test]
fn test_path_round_trips_through_parse() {
    for route in [Route::Landing, Route::Auth, Route::team("hack2024")] {
        assert_eq!(Route::parse(&route.path()), route);
    }
    assert_eq!(Route::team("abc").to_string(), "/hackathon/abc/team");
}

#[test]
fn test_blank_path_is_landing() {
    assert_eq!(Route::parse(""), Route::Landing);
    assert_eq!(Route::parse("   "), Route::Landing);
}
