use super::*;

#[tokio::test]
async fn app_assembles_a_router() {
    assert!(app().is_ok());
}

#[tokio::test]
async fn route_list_covers_the_three_pages() {
    let routes = generate_route_list(site::app::App);
    assert_eq!(routes.len(), 3);
    let paths: Vec<String> = routes.iter().map(|r| r.path().to_owned()).collect();
    assert!(paths.iter().any(|p| p.contains("design")));
    assert!(paths.iter().any(|p| p.contains("contact")));
}
