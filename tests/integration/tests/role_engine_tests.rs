//! Role assignment engine tests
//!
//! Drives `RoleAssignmentService` end to end against the in-memory
//! repositories, covering slot uniqueness, idempotent reassignment, history
//! intervals, and the compensating-record path.

use bng_core::value_objects::{Actor, AssignmentId, ChapterId, MemberId, ZoneId};
use bng_service::{RoleAssignmentService, ServiceError};
use integration_tests::InMemoryStore;

fn assign_request(member_id: MemberId, role_type: &str) -> bng_service::dto::AssignRoleRequest {
    bng_service::dto::AssignRoleRequest {
        member_id: member_id.into_inner(),
        role_type: role_type.to_string(),
        performed_by_id: None,
        performed_by_name: Some("Admin".to_string()),
    }
}

struct Setup {
    store: InMemoryStore,
    zone_id: ZoneId,
    chapter_id: ChapterId,
    member_id: MemberId,
}

fn setup() -> Setup {
    let store = InMemoryStore::new();
    let zone_id = store.add_zone("North");
    let chapter_id = store.add_chapter(zone_id, "Summit");
    let member_id = store.add_member("Asha", Some(chapter_id));
    Setup {
        store,
        zone_id,
        chapter_id,
        member_id,
    }
}

#[tokio::test]
async fn test_assign_creates_live_row_and_open_interval() {
    let s = setup();
    let ctx = s.store.context();
    let service = RoleAssignmentService::new(&ctx);

    let assigned = service
        .assign_chapter_role(s.chapter_id, assign_request(s.member_id, "secretary"))
        .await
        .unwrap();
    assert_eq!(assigned.role_type, "secretary");
    assert_eq!(assigned.member_id, s.member_id.to_string());

    let live = service.list_chapter_roles(s.chapter_id).await.unwrap();
    assert_eq!(live.len(), 1);

    let history = service.chapter_role_history(s.chapter_id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].action, "assigned");
    assert_eq!(history[0].performed_by_name, "Admin");
    assert!(history[0].end_date.is_none());
}

#[tokio::test]
async fn test_assign_unknown_chapter_is_not_found() {
    let s = setup();
    let ctx = s.store.context();
    let service = RoleAssignmentService::new(&ctx);

    let err = service
        .assign_chapter_role(ChapterId::new(9999), assign_request(s.member_id, "secretary"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_assign_unknown_member_is_not_found() {
    let s = setup();
    let ctx = s.store.context();
    let service = RoleAssignmentService::new(&ctx);

    let err = service
        .assign_chapter_role(s.chapter_id, assign_request(MemberId::new(9999), "treasurer"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_assign_unknown_role_type_is_validation_error() {
    let s = setup();
    let ctx = s.store.context();
    let service = RoleAssignmentService::new(&ctx);

    let err = service
        .assign_chapter_role(s.chapter_id, assign_request(s.member_id, "grandVizier"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_occupied_slot_is_conflict() {
    let s = setup();
    let rival = s.store.add_member("Ravi", Some(s.chapter_id));
    let ctx = s.store.context();
    let service = RoleAssignmentService::new(&ctx);

    service
        .assign_chapter_role(s.chapter_id, assign_request(s.member_id, "chapterHead"))
        .await
        .unwrap();

    let err = service
        .assign_chapter_role(s.chapter_id, assign_request(rival, "chapterHead"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 409);

    // The losing attempt leaves no trace in history
    let history = service.chapter_role_history(s.chapter_id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].member_id, s.member_id.to_string());
}

#[tokio::test]
async fn test_same_member_reassign_is_idempotent() {
    let s = setup();
    let ctx = s.store.context();
    let service = RoleAssignmentService::new(&ctx);

    let first = service
        .assign_chapter_role(s.chapter_id, assign_request(s.member_id, "guardian"))
        .await
        .unwrap();
    let second = service
        .assign_chapter_role(s.chapter_id, assign_request(s.member_id, "guardian"))
        .await
        .unwrap();
    assert_eq!(first.id, second.id);

    // No second interval was opened
    let history = service.chapter_role_history(s.chapter_id).await.unwrap();
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn test_remove_closes_the_open_interval() {
    let s = setup();
    let ctx = s.store.context();
    let service = RoleAssignmentService::new(&ctx);

    let assigned = service
        .assign_chapter_role(s.chapter_id, assign_request(s.member_id, "treasurer"))
        .await
        .unwrap();
    let assignment_id = AssignmentId::new(assigned.id.parse().unwrap());

    let removed = service
        .remove_chapter_role(s.chapter_id, assignment_id, Actor::system())
        .await
        .unwrap();

    assert!(service.list_chapter_roles(s.chapter_id).await.unwrap().is_empty());

    // One assign + one remove is a single closed interval, not two records
    let history = service.chapter_role_history(s.chapter_id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].action, "removed");
    assert_eq!(history[0].end_date, Some(removed.removed_at));
}

#[tokio::test]
async fn test_slot_is_reusable_after_removal() {
    let s = setup();
    let successor = s.store.add_member("Ravi", Some(s.chapter_id));
    let ctx = s.store.context();
    let service = RoleAssignmentService::new(&ctx);

    let first = service
        .assign_chapter_role(s.chapter_id, assign_request(s.member_id, "chapterHead"))
        .await
        .unwrap();
    service
        .remove_chapter_role(
            s.chapter_id,
            AssignmentId::new(first.id.parse().unwrap()),
            Actor::system(),
        )
        .await
        .unwrap();

    // The freed slot accepts a new holder, opening a second interval
    let second = service
        .assign_chapter_role(s.chapter_id, assign_request(successor, "chapterHead"))
        .await
        .unwrap();
    assert_ne!(first.id, second.id);

    let history = service.chapter_role_history(s.chapter_id).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].action, "assigned");
    assert!(history[0].end_date.is_none());
    assert_eq!(history[0].member_id, successor.to_string());
    assert_eq!(history[1].action, "removed");
    assert!(history[1].end_date.is_some());
}

#[tokio::test]
async fn test_remove_from_wrong_chapter_is_not_found() {
    let s = setup();
    let other_chapter = s.store.add_chapter(s.zone_id, "Valley");
    let ctx = s.store.context();
    let service = RoleAssignmentService::new(&ctx);

    let assigned = service
        .assign_chapter_role(s.chapter_id, assign_request(s.member_id, "secretary"))
        .await
        .unwrap();
    let assignment_id = AssignmentId::new(assigned.id.parse().unwrap());

    let err = service
        .remove_chapter_role(other_chapter, assignment_id, Actor::system())
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);

    // The assignment is untouched
    assert_eq!(service.list_chapter_roles(s.chapter_id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_remove_nonexistent_assignment_is_not_found() {
    let s = setup();
    let ctx = s.store.context();
    let service = RoleAssignmentService::new(&ctx);

    let err = service
        .remove_chapter_role(s.chapter_id, AssignmentId::new(424242), Actor::system())
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_remove_without_open_interval_writes_compensating_record() {
    let s = setup();
    let ctx = s.store.context();
    let service = RoleAssignmentService::new(&ctx);

    let assigned = service
        .assign_chapter_role(s.chapter_id, assign_request(s.member_id, "districtCoordinator"))
        .await
        .unwrap();
    let assignment_id = AssignmentId::new(assigned.id.parse().unwrap());

    // Simulate pre-existing data where the live row has no open interval
    s.store.corrupt_chapter_history(s.chapter_id);

    service
        .remove_chapter_role(s.chapter_id, assignment_id, Actor::member(s.member_id, "Asha"))
        .await
        .unwrap();

    let history = service.chapter_role_history(s.chapter_id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].action, "removed_direct_action");
    assert_eq!(history[0].start_date, history[0].end_date.unwrap());
    assert_eq!(history[0].performed_by_name, "Asha");
}

#[tokio::test]
async fn test_zone_role_round_trip() {
    let s = setup();
    let ctx = s.store.context();
    let service = RoleAssignmentService::new(&ctx);

    let assigned = service
        .assign_zone_role(s.zone_id, assign_request(s.member_id, "RegionalDirector"))
        .await
        .unwrap();
    assert_eq!(assigned.role_type, "RegionalDirector");
    assert_eq!(service.list_zone_roles(s.zone_id).await.unwrap().len(), 1);

    let assignment_id = AssignmentId::new(assigned.id.parse().unwrap());
    service
        .remove_zone_role(s.zone_id, assignment_id, Actor::system())
        .await
        .unwrap();

    assert!(service.list_zone_roles(s.zone_id).await.unwrap().is_empty());
    let history = service.zone_role_history(s.zone_id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].action, "removed");
}

#[tokio::test]
async fn test_zone_slot_conflict() {
    let s = setup();
    let rival = s.store.add_member("Ravi", None);
    let ctx = s.store.context();
    let service = RoleAssignmentService::new(&ctx);

    service
        .assign_zone_role(s.zone_id, assign_request(s.member_id, "JointSecretary"))
        .await
        .unwrap();
    let err = service
        .assign_zone_role(s.zone_id, assign_request(rival, "JointSecretary"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 409);
}

#[tokio::test]
async fn test_chapter_and_zone_slots_are_independent() {
    let s = setup();
    let ctx = s.store.context();
    let service = RoleAssignmentService::new(&ctx);

    // The same member may hold a chapter role and a zone role at once
    service
        .assign_chapter_role(s.chapter_id, assign_request(s.member_id, "chapterHead"))
        .await
        .unwrap();
    service
        .assign_zone_role(s.zone_id, assign_request(s.member_id, "RegionalDirector"))
        .await
        .unwrap();

    assert_eq!(service.list_chapter_roles(s.chapter_id).await.unwrap().len(), 1);
    assert_eq!(service.list_zone_roles(s.zone_id).await.unwrap().len(), 1);
}
