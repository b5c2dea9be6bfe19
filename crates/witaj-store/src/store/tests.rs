use super::Store;
use witaj_core::config::StoreConfig;
use witaj_core::error::WitajError;
use witaj_core::greeting::HelloService;
use witaj_core::lang::Lang;

/// Create an in-memory store seeded with the default language list.
async fn test_store() -> Store {
    let config = StoreConfig {
        db_path: ":memory:".to_string(),
        ..StoreConfig::default()
    };
    Store::new(&config).await.unwrap()
}

#[tokio::test]
async fn test_find_seeded_languages() {
    let store = test_store().await;

    let en = store.find_lang_by_id(1).await.unwrap().unwrap();
    assert_eq!(en.welcome_message, "Hello");
    assert_eq!(en.code, "en");

    let pl = store.find_lang_by_id(2).await.unwrap().unwrap();
    assert_eq!(pl.welcome_message, "Cześć");
    assert_eq!(pl.code, "pl");
}

#[tokio::test]
async fn test_find_unknown_language_returns_none() {
    let store = test_store().await;
    assert!(store.find_lang_by_id(99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_custom_seed_list() {
    let config = StoreConfig {
        db_path: ":memory:".to_string(),
        languages: vec![Lang {
            id: 7,
            welcome_message: "Hola".to_string(),
            code: "es".to_string(),
        }],
    };
    let store = Store::new(&config).await.unwrap();

    let es = store.find_lang_by_id(7).await.unwrap().unwrap();
    assert_eq!(es.welcome_message, "Hola");
    // Default records are not present when the config replaces the list.
    assert!(store.find_lang_by_id(2).await.unwrap().is_none());
}

#[tokio::test]
async fn test_seeding_is_idempotent() {
    let store = test_store().await;

    // Re-seeding with a conflicting message must not overwrite the row.
    let conflicting = vec![Lang {
        id: 1,
        welcome_message: "Overwritten".to_string(),
        code: "xx".to_string(),
    }];
    Store::seed_languages(store.pool(), &conflicting)
        .await
        .unwrap();

    let en = store.find_lang_by_id(1).await.unwrap().unwrap();
    assert_eq!(en.welcome_message, "Hello");
}

#[tokio::test]
async fn test_add_and_list_todos_in_id_order() {
    let store = test_store().await;

    let first = store.add_todo("Buy milk").await.unwrap();
    let second = store.add_todo("Walk the dog").await.unwrap();
    assert!(first.id < second.id);
    assert!(!first.done);

    let todos = store.find_all_todos().await.unwrap();
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0].description, "Buy milk");
    assert_eq!(todos[1].description, "Walk the dog");
}

#[tokio::test]
async fn test_toggle_flips_done() {
    let store = test_store().await;
    let todo = store.add_todo("Buy milk").await.unwrap();

    let toggled = store.toggle_todo(todo.id).await.unwrap();
    assert!(toggled.done);
    assert_eq!(toggled.description, "Buy milk");
}

#[tokio::test]
async fn test_double_toggle_restores_original() {
    let store = test_store().await;
    let todo = store.add_todo("Buy milk").await.unwrap();

    let once = store.toggle_todo(todo.id).await.unwrap();
    assert!(once.done);
    let twice = store.toggle_todo(todo.id).await.unwrap();
    assert!(!twice.done);
}

#[tokio::test]
async fn test_toggle_unknown_id_is_not_found() {
    let store = test_store().await;
    let err = store.toggle_todo(42).await.unwrap_err();
    assert!(matches!(err, WitajError::NotFound(_)));
}

#[tokio::test]
async fn test_toggle_leaves_other_todos_untouched() {
    let store = test_store().await;
    let a = store.add_todo("First").await.unwrap();
    let b = store.add_todo("Second").await.unwrap();

    store.toggle_todo(a.id).await.unwrap();

    let todos = store.find_all_todos().await.unwrap();
    assert!(todos.iter().find(|t| t.id == a.id).unwrap().done);
    assert!(!todos.iter().find(|t| t.id == b.id).unwrap().done);
}

#[tokio::test]
async fn test_greeting_against_seeded_store() {
    let store = test_store().await;
    let service = HelloService::new(store);

    assert_eq!(
        service.prepare_greeting(Some("Ala"), Some("2")).await.unwrap(),
        "Cześć Ala!"
    );
    assert_eq!(
        service.prepare_greeting(None, None).await.unwrap(),
        "Hello world!"
    );
    // Unknown explicit id degrades to the built-in fallback message.
    assert_eq!(
        service.prepare_greeting(None, Some("99")).await.unwrap(),
        "Hello world!"
    );
}
