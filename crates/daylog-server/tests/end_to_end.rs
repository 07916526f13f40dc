//! End-to-end tests through the service facade.

use std::time::Duration;

use futures::StreamExt;
use pretty_assertions::assert_eq;

use daylog_core::{ActivityPatch, EntityStore, NewActivity, NewUser, StoreConfig, UserPatch};
use daylog_server::{ActivityTopic, DaylogService};

fn service() -> DaylogService {
    DaylogService::new(EntityStore::new(StoreConfig::new().with_rng_seed(77)))
}

#[tokio::test]
async fn test_register_create_subscribe_and_resolve() {
    let service = service();

    let user = service.register(NewUser::new("A", "B"));
    assert!(!user.id.is_empty());
    assert_eq!(user.first_name, "A");
    assert_eq!(user.last_name, "B");

    let mut created = service.activity_created();
    let activity = service.create_activity(NewActivity::new(user.id.clone(), "2024-01-01"));

    let received = created.next().await.unwrap();
    assert_eq!(received, activity);
    assert_eq!(received.date, "2024-01-01");
    assert_eq!(received.user_id, user.id);

    assert_eq!(service.activity("2024-01-01"), Some(activity.clone()));

    let fetched = service.user(&user.id).unwrap();
    assert_eq!(service.user_activities(&fetched), vec![activity.clone()]);
    assert_eq!(service.activity_user(&activity), Some(user));
}

#[tokio::test]
async fn test_each_subscriber_gets_each_event_once_in_order() {
    let service = service();
    let mut first = service.activity_created();
    let mut second = service.activity_created();

    let published: Vec<_> = (1..=5)
        .map(|day| service.create_activity(NewActivity::new("u", format!("2024-01-0{}", day))))
        .collect();

    for stream in [&mut first, &mut second] {
        for expected in &published {
            assert_eq!(stream.next_event().await.as_ref(), Some(expected));
        }
        assert!(stream.try_next_event().is_none());
    }
}

#[tokio::test]
async fn test_late_subscriber_misses_earlier_events() {
    let service = service();
    service.create_activity(NewActivity::new("u", "2024-01-01"));

    let mut late = service.activity_created();
    assert!(late.try_next_event().is_none());

    let next = service.create_activity(NewActivity::new("u", "2024-01-02"));
    assert_eq!(late.next_event().await, Some(next));
}

#[tokio::test]
async fn test_update_and_delete_events() {
    let service = service();
    let mut updated = service.activity_updated();
    let mut deleted = service.activity_deleted();
    let mut created = service.activity_created();

    let activity = service.create_activity(NewActivity::new("u", "2024-01-01").with_water(1.0));
    let changed = service
        .update_activity(&activity.id, ActivityPatch::default().with_ate_healthy(true))
        .unwrap();
    assert_eq!(changed.litres_of_drinking_water, Some(1.0));
    assert_eq!(changed.did_you_eat_healthy, Some(true));

    let removed = service.delete_activity(&activity.id).unwrap();

    assert_eq!(created.next_event().await, Some(activity));
    assert_eq!(updated.next_event().await, Some(changed.clone()));
    assert_eq!(deleted.next_event().await, Some(removed));
    assert!(service.activities().is_empty());
}

#[tokio::test]
async fn test_not_found_mutations_have_no_side_effects() {
    let service = service();
    let user = service.register(NewUser::new("A", "B"));
    service.create_activity(NewActivity::new(user.id.clone(), "2024-01-01"));
    let mut updated = service.activity_updated();
    let mut deleted = service.activity_deleted();

    let users_before = service.users();
    let activities_before = service.activities();

    assert!(service
        .update_user("missing", UserPatch::default().with_first_name("X"))
        .unwrap_err()
        .is_not_found());
    assert!(service
        .update_activity("missing", ActivityPatch::default().with_date("x"))
        .unwrap_err()
        .is_not_found());
    assert!(service.delete_activity("missing").unwrap_err().is_not_found());

    assert_eq!(service.users(), users_before);
    assert_eq!(service.activities(), activities_before);
    assert!(updated.try_next_event().is_none());
    assert!(deleted.try_next_event().is_none());
}

#[tokio::test]
async fn test_update_user_merges_fields() {
    let service = service();
    let user = service.register(NewUser::new("A", "B"));

    let updated = service
        .update_user(&user.id, UserPatch::default().with_last_name("C"))
        .unwrap();

    assert_eq!(updated.id, user.id);
    assert_eq!(updated.first_name, "A");
    assert_eq!(updated.last_name, "C");
    assert_eq!(service.user(&user.id), Some(updated));
}

#[tokio::test]
async fn test_delete_all_activities() {
    let service = service();
    let mut deleted = service.activity_deleted();
    for day in 1..=4 {
        service.create_activity(NewActivity::new("u", format!("2024-01-0{}", day)));
    }

    assert_eq!(service.delete_all_activities().count, 4);
    assert!(service.activities().is_empty());
    assert!(deleted.try_next_event().is_none());
}

#[tokio::test]
async fn test_dangling_owner_resolves_to_none() {
    let service = service();
    let activity = service.create_activity(NewActivity::new("ghost", "2024-01-01"));
    assert_eq!(service.activity_user(&activity), None);
}

#[tokio::test]
async fn test_dropped_stream_is_released() {
    let service = service();
    let stream = service.subscribe(ActivityTopic::Created);
    let kept = service.subscribe(ActivityTopic::Created);
    assert_eq!(service.pubsub().subscription_count(), 2);

    drop(stream);
    assert_eq!(service.pubsub().subscription_count(), 1);
    assert_eq!(
        service.pubsub().subscriptions_for_topic("activityCreated"),
        vec![kept.id()]
    );
}

#[tokio::test]
async fn test_concurrent_writers_publish_in_store_order() {
    let service = service();
    let mut created = service.activity_created();

    let mut tasks = Vec::new();
    for worker in 0..4 {
        let service = service.clone();
        tasks.push(tokio::spawn(async move {
            for day in 0..10 {
                service.create_activity(NewActivity::new(
                    format!("u{}", worker),
                    format!("2024-01-{:02}", day + 1),
                ));
                tokio::task::yield_now().await;
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let stored = service.activities();
    assert_eq!(stored.len(), 40);
    for expected in &stored {
        let received = tokio::time::timeout(Duration::from_secs(1), created.next_event())
            .await
            .unwrap();
        assert_eq!(received.as_ref(), Some(expected));
    }
}
