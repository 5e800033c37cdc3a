use entity_framework::{Entity, EntityLocks, InMemoryRepository, JournalActor, Repository};
use std::fmt;
use std::sync::Arc;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Tray {
    id: u32,
    items: Vec<String>,
}

impl Entity for Tray {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug)]
enum TrayEvent {
    Loaded { tray: u32, count: usize },
    Cleared { tray: u32 },
}

impl fmt::Display for TrayEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrayEvent::Loaded { tray, count } => write!(f, "Tray {tray} holds {count} items."),
            TrayEvent::Cleared { tray } => write!(f, "Tray {tray} cleared."),
        }
    }
}

// --- Tests ---

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_locked_read_modify_write_loses_no_updates() {
    let repo = Arc::new(InMemoryRepository::new());
    let locks = Arc::new(EntityLocks::new("tray"));
    repo.save(Tray {
        id: 1,
        items: vec![],
    });

    let mut handles = vec![];
    for i in 0..50 {
        let repo = repo.clone();
        let locks = locks.clone();
        handles.push(tokio::spawn(async move {
            let _guard = locks.lock(&1).await;
            let mut tray = repo.find(&1).unwrap();
            tokio::task::yield_now().await;
            tray.items.push(format!("item_{i}"));
            repo.save(tray);
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(repo.find(&1).unwrap().items.len(), 50);
}

#[tokio::test]
async fn test_delete_under_lock_reclaims_token() {
    let repo = InMemoryRepository::new();
    let locks = EntityLocks::new("tray");
    repo.save(Tray {
        id: 1,
        items: vec!["a".into()],
    });

    let mut guard = locks.lock(&1).await;
    repo.remove(guard.key());
    guard.release();
    drop(guard);

    assert!(repo.is_empty());
    assert!(locks.is_empty());
}

#[tokio::test]
async fn test_journal_full_lifecycle() {
    let (actor, client) = JournalActor::new(10);
    let handle = tokio::spawn(actor.run());

    client.record(TrayEvent::Loaded { tray: 1, count: 3 }).unwrap();
    client.record(TrayEvent::Cleared { tray: 1 }).unwrap();

    let entries = client.entries().await.unwrap();
    assert_eq!(
        entries,
        vec![
            "Tray 1 holds 3 items.".to_string(),
            "Tray 1 cleared.".to_string()
        ]
    );

    // Dropping the last client stops the actor.
    drop(client);
    handle.await.unwrap();
}
