use super::{is_active, page_name};

// --- is_active ---

#[test]
fn root_link_is_active_only_on_the_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/design", "/"));
    assert!(!is_active("/contact", "/"));
}

#[test]
fn section_links_match_exactly() {
    assert!(is_active("/design", "/design"));
    assert!(is_active("/contact", "/contact"));
}

#[test]
fn section_links_match_nested_paths() {
    assert!(is_active("/design/systems", "/design"));
}

#[test]
fn similar_prefixes_do_not_match() {
    assert!(!is_active("/designers", "/design"));
    assert!(!is_active("/design", "/contact"));
}

// --- page_name ---

#[test]
fn known_routes_map_to_their_page_names() {
    assert_eq!(page_name("/"), "home");
    assert_eq!(page_name("/design"), "design");
    assert_eq!(page_name("/design/systems"), "design");
    assert_eq!(page_name("/contact"), "contact");
}

#[test]
fn unknown_routes_map_to_not_found() {
    assert_eq!(page_name("/nope"), "not-found");
}
