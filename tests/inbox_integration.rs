// SPDX-License-Identifier: MPL-2.0
use chrono::{DateTime, FixedOffset, Utc};
use mealbox_console::app::{App, Flags, Message};
use mealbox_console::config::{self, Config};
use mealbox_console::domain::notification::{NotificationId, NotificationKind};
use mealbox_console::feed::{
    JsonFileSource, MemoryStore, MutationService, NotificationSource, Snapshot,
};
use mealbox_console::i18n::fluent::I18n;
use mealbox_console::ui::inbox::projection::{self, InboxModel, KindIcon, Zone};
use mealbox_console::ui::inbox::{self, TimestampFormatter};
use std::sync::Arc;
use tempfile::tempdir;

const FEED: &str = r#"[
    {
        "id": 1,
        "type": "alert",
        "title": "Low stock",
        "message": "Only 3 boxes of Thai curry left",
        "createdAt": "2024-03-01T09:30:00Z",
        "isRead": false
    },
    {
        "id": 2,
        "type": "delivery",
        "title": "Courier dispatched",
        "message": "Route 12 left the kitchen",
        "createdAt": "2024-03-01T10:00:00Z",
        "isRead": true
    },
    {
        "id": 3,
        "type": "menu_update",
        "title": "Menu published",
        "createdAt": "2024-03-01T11:15:00Z"
    }
]"#;

fn utc_formatter() -> TimestampFormatter {
    TimestampFormatter::default().with_zone(Zone::Fixed(
        FixedOffset::east_opt(0).expect("zero offset is valid"),
    ))
}

fn store_from_feed() -> (MemoryStore, tempfile::TempDir) {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("feed.json");
    std::fs::write(&path, FEED).expect("write feed");
    (MemoryStore::seeded_from(JsonFileSource::new(path)), dir)
}

#[test]
fn feed_file_projects_to_inbox_rows() {
    let (store, _dir) = store_from_feed();
    let snapshot = store.fetch().expect("fetch");

    let model = projection::project(snapshot.notifications(), false, &utc_formatter());
    let items = model.items();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].title, "Low stock");
    assert_eq!(items[0].icon, KindIcon::Danger);
    assert_eq!(items[0].timestamp, "2024-03-01 09:30");
    assert!(items[0].emphasized && items[0].can_mark_read);

    assert_eq!(items[1].icon, KindIcon::Pending);
    assert!(!items[1].unread_dot && !items[1].can_mark_read);

    // Unknown tag falls back to the general kind
    assert_eq!(snapshot.notifications()[2].kind, NotificationKind::General);
    assert_eq!(items[2].icon, KindIcon::General);
    assert!(items[2].message.is_empty());
}

#[test]
fn mutations_show_up_on_next_fetch() {
    let (store, _dir) = store_from_feed();
    let before = store.fetch().expect("fetch");
    assert_eq!(before.unread_count(), 2);

    store.mark_read(NotificationId::new(1));
    store.delete(NotificationId::new(3));

    let after = store.fetch().expect("fetch");
    assert_eq!(after.len(), 2);
    assert_eq!(after.unread_count(), 0);

    let model = projection::project(after.notifications(), false, &utc_formatter());
    assert!(model.items().iter().all(|item| !item.can_mark_read));
}

#[test]
fn deleting_everything_leads_to_empty_state() {
    let (store, _dir) = store_from_feed();
    let snapshot = store.fetch().expect("fetch");
    for notification in snapshot.notifications() {
        store.delete(notification.id);
    }

    let after = store.fetch().expect("fetch");
    assert_eq!(
        projection::project(after.notifications(), false, &utc_formatter()),
        InboxModel::Empty
    );
}

#[test]
fn loading_hides_stale_list() {
    let (store, _dir) = store_from_feed();
    let snapshot = store.fetch().expect("fetch");

    assert_eq!(
        projection::project(snapshot.notifications(), true, &utc_formatter()),
        InboxModel::Loading
    );
}

#[test]
fn app_forwards_intents_to_the_store() {
    let (store, dir) = store_from_feed();
    let store = Arc::new(store);
    let flags = Flags {
        lang: Some("en-US".to_string()),
        config_dir: Some(dir.path().to_string_lossy().into_owned()),
        ..Flags::default()
    };

    let (mut app, _task) = App::with_service(flags, Config::default(), store.clone());
    let loaded = store.fetch().expect("fetch");
    let _ = app.update(Message::FeedLoaded(app.latest_fetch(), Ok(loaded.clone())));

    let _ = app.update(Message::Inbox(inbox::Message::Delete(NotificationId::new(2))));

    // Display waits for the refetch
    assert_eq!(app.snapshot(), &loaded);

    let refetched = store.fetch().expect("fetch");
    assert!(!refetched.contains(NotificationId::new(2)));
    let _ = app.update(Message::FeedLoaded(app.latest_fetch(), Ok(refetched.clone())));
    assert_eq!(app.snapshot(), &refetched);
}

#[test]
fn late_refetch_does_not_resurrect_deleted_notifications() {
    let (store, dir) = store_from_feed();
    let store = Arc::new(store);
    let flags = Flags {
        lang: Some("en-US".to_string()),
        config_dir: Some(dir.path().to_string_lossy().into_owned()),
        ..Flags::default()
    };

    let (mut app, _task) = App::with_service(flags, Config::default(), store.clone());
    let _ = app.update(Message::FeedLoaded(app.latest_fetch(), store.fetch()));

    let _ = app.update(Message::Inbox(inbox::Message::Delete(NotificationId::new(1))));
    let first = (app.latest_fetch(), store.fetch());
    let _ = app.update(Message::Inbox(inbox::Message::Delete(NotificationId::new(2))));
    let second = (app.latest_fetch(), store.fetch());

    let _ = app.update(Message::FeedLoaded(second.0, second.1));
    let _ = app.update(Message::FeedLoaded(first.0, first.1));

    let ids: Vec<u64> = app
        .snapshot()
        .notifications()
        .iter()
        .map(|n| n.id.value())
        .collect();
    assert_eq!(ids, vec![3]);
}

#[test]
fn config_timestamp_format_drives_rows() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[inbox]\ntimestamp_format = \"%d/%m %H:%M\"\n").expect("write config");

    let config = config::load_from_path(&path).expect("load config");
    let formatter = config.inbox.timestamp_formatter().with_zone(Zone::Fixed(
        FixedOffset::east_opt(0).expect("zero offset is valid"),
    ));

    let created_at: DateTime<Utc> = "2024-03-01T09:30:00Z".parse().expect("timestamp");
    assert_eq!(formatter.format(&created_at), "01/03 09:30");
}

#[test]
fn localized_labels_follow_language() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    let i18n = I18n::new(None, &config);

    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("inbox-delete"), "Supprimer");

    let english = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(english.tr("inbox-mark-read"), "Mark Read");
}

#[test]
fn empty_snapshot_is_valid() {
    assert_eq!(Snapshot::from_json("[]"), Ok(Snapshot::empty()));
}
