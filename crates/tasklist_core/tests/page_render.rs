use tasklist_core::view::{
    render_page, render_page_text, AddTodoForm, PageView, EMPTY_LIST_TITLE, LOADING_BODY,
    NO_TASKS_HEADER,
};
use tasklist_core::{MemoryKeyValueStore, SlotStorage, TodoStore, TODOS_SLOT_KEY};

const THREE_TODOS: &str = r#"[
    {"id":"1","text":"alpha","completed":true},
    {"id":"2","text":"beta","completed":false},
    {"id":"3","text":"gamma","completed":true}
]"#;

fn store_with(raw: Option<&str>) -> TodoStore<SlotStorage<MemoryKeyValueStore>> {
    let backend = match raw {
        Some(raw) => MemoryKeyValueStore::with_item(TODOS_SLOT_KEY, raw),
        None => MemoryKeyValueStore::new(),
    };
    TodoStore::new(SlotStorage::new(backend))
}

#[test]
fn placeholder_is_identical_regardless_of_persisted_state() {
    let empty = store_with(None);
    let populated = store_with(Some(THREE_TODOS));
    let corrupt = store_with(Some("not json"));

    let first = render_page(&empty);
    assert!(matches!(first, PageView::Loading(ref loading) if loading.body == LOADING_BODY));
    assert_eq!(render_page(&populated), first);
    assert_eq!(render_page(&corrupt), first);
}

#[test]
fn hydrated_render_reflects_loaded_list() {
    let mut store = store_with(Some(THREE_TODOS));
    store.hydrate();

    let PageView::Ready(list) = render_page(&store) else {
        panic!("expected hydrated view");
    };
    assert_eq!(list.header, "2 of 3 tasks completed");
    assert_eq!(list.items.len(), 3);
    assert_eq!(list.items[1].text, "beta");
    assert!(list.items[0].struck);
    assert!(!list.items[1].struck);
    assert!(list.empty_state.is_none());
}

#[test]
fn empty_hydrated_list_shows_empty_state() {
    let mut store = store_with(None);
    store.hydrate();

    let PageView::Ready(list) = render_page(&store) else {
        panic!("expected hydrated view");
    };
    assert_eq!(list.header, NO_TASKS_HEADER);
    assert_eq!(list.empty_state.map(|e| e.title), Some(EMPTY_LIST_TITLE));
}

#[test]
fn form_commands_drive_store_and_render() {
    let mut store = store_with(None);
    store.hydrate();
    let mut form = AddTodoForm::new();

    form.set_input("   ");
    assert!(form.submit().is_none());

    form.set_input(" write report ");
    if let Some(command) = form.submit() {
        store.apply(command);
    }

    let text = render_page_text(&render_page(&store));
    assert!(text.contains("0 of 1 tasks completed"));
    assert!(text.contains("[ ] write report"));
}
