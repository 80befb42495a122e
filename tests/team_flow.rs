use std::sync::Arc;
use std::time::Duration;

use devcircle::backend::{
    generate_invite_code, mock_current_user, MemoryClipboard, MemoryTeamRepository, TeamRepository,
};
use devcircle::models::{Role, TeamDraft};
use devcircle::pages::{TeamPage, TeamServices, TeamView};
use devcircle::router::Route;

fn services(repository: Arc<dyn TeamRepository>) -> TeamServices {
    TeamServices {
        repository,
        clipboard: Arc::new(MemoryClipboard::default()),
        current_user: mock_current_user(),
        invite_origin: "https://devcircle.example".to_string(),
        notification_ttl: Duration::from_secs(4),
    }
}

#[tokio::test]
async fn test_repository_create_update_remove() {
    let repo = MemoryTeamRepository::empty();
    let leader = mock_current_user();

    let team = repo
        .create_team(TeamDraft::new("Night Owls", "We code at night", 3), &leader)
        .await
        .unwrap();
    assert_eq!(team.members.len(), 1);
    assert_eq!(team.role_of(&leader.id), Some(Role::Leader));

    let updated = repo
        .update_team(TeamDraft::new("Early Birds", "We code at dawn", 5))
        .await
        .unwrap();
    assert_eq!(updated.name, "Early Birds");
    assert_eq!(updated.max_members, 5);
    assert_eq!(updated.invite_code, team.invite_code);

    let loaded = repo.get_team("any").await.unwrap().unwrap();
    assert_eq!(loaded, updated);
}

#[tokio::test]
async fn test_mutations_without_team_fail() {
    let repo = MemoryTeamRepository::empty();
    assert!(repo.update_team(TeamDraft::default()).await.is_err());
    assert!(repo.remove_member("user2").await.is_err());
    assert!(repo.change_role("user2", Role::Leader).await.is_err());
}

#[tokio::test]
async fn test_page_flow_from_route() {
    let route = Route::parse("/hackathon/spring/team");
    let Route::Team { hackathon_id } = route else { panic!("expected team route") };

    let mut page = TeamPage::new(&hackathon_id, services(Arc::new(MemoryTeamRepository::with_sample_team())));
    assert_eq!(page.view(), TeamView::Loading);
    page.load().await;

    assert_eq!(page.hackathon_id(), "spring");
    assert_eq!(page.invite_link(), "https://devcircle.example/join/CC2024XYZ");

    page.change_role("user3", Role::Leader).await;
    page.request_remove("user2");
    page.confirm().await;

    let team = page.team().unwrap();
    assert_eq!(team.occupancy(), "2/4 Members");
    assert_eq!(team.role_of("user3"), Some(Role::Leader));
    assert_eq!(team.role_of("user1"), Some(Role::Leader));
}

#[test]
fn test_invite_code_shape() {
    for _ in 0..50 {
        let code = generate_invite_code();
        assert_eq!(code.len(), 8);
        assert!(code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }
}
