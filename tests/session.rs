//! Session behaviour driven through commands against an in-memory store.

use resume_tui::domain::{GroupKind, GroupPreview, SimpleFieldKind, Theme, THEME_KEY};
use resume_tui::services::{MemoryStore, Store};
use resume_tui::session::{Focus, KEEP_ONE_ENTRY_WARNING};
use resume_tui::{Command, Outcome, Session};

fn fresh() -> Session<MemoryStore> {
    Session::load(MemoryStore::new(), Theme::Light).unwrap()
}

fn reload(session: Session<MemoryStore>) -> Session<MemoryStore> {
    Session::load(session.into_store(), Theme::Light).unwrap()
}

fn edit(session: &mut Session<MemoryStore>, kind: SimpleFieldKind, value: &str) {
    let outcome = session
        .apply(Command::EditField(kind, value.to_string()))
        .unwrap();
    assert_eq!(outcome, Outcome::Updated);
}

fn fill_first_entry(session: &mut Session<MemoryStore>, group: GroupKind, value: &str) {
    let entry = session.resume().group(group).entries()[0].id;
    session
        .apply(Command::EditEntry {
            group,
            entry,
            value: value.to_string(),
        })
        .unwrap();
}

fn preview_text(session: &Session<MemoryStore>, kind: SimpleFieldKind) -> String {
    let preview = session.preview();
    match kind {
        SimpleFieldKind::Name => preview.name.clone(),
        SimpleFieldKind::Email => preview.email.clone(),
        SimpleFieldKind::Phone => preview.phone.clone(),
        SimpleFieldKind::Summary => preview.summary.clone(),
        SimpleFieldKind::Skills => preview.skills.join("|"),
    }
}

#[test]
fn field_value_survives_reload() {
    let mut session = fresh();
    edit(&mut session, SimpleFieldKind::Name, "Ada Lovelace");
    edit(&mut session, SimpleFieldKind::Email, " ada@example.com ");
    edit(&mut session, SimpleFieldKind::Phone, "  ");
    edit(
        &mut session,
        SimpleFieldKind::Summary,
        "Mathematician.\nWrote the first program.",
    );
    edit(&mut session, SimpleFieldKind::Skills, "Analysis, Engines ,, Notes");

    let inputs: Vec<String> = SimpleFieldKind::ALL
        .iter()
        .map(|&k| session.resume().value(k).to_string())
        .collect();
    let previews: Vec<String> = SimpleFieldKind::ALL
        .iter()
        .map(|&k| preview_text(&session, k))
        .collect();

    let session = reload(session);
    for (i, kind) in SimpleFieldKind::ALL.into_iter().enumerate() {
        assert_eq!(session.resume().value(kind), inputs[i], "{:?} input", kind);
        assert_eq!(preview_text(&session, kind), previews[i], "{:?} preview", kind);
    }

    assert_eq!(session.preview().email, "ada@example.com");
    assert_eq!(session.preview().phone, "...");
    assert_eq!(
        session.preview().summary,
        "Mathematician.\nWrote the first program."
    );
    assert_eq!(session.preview().skills, vec!["Analysis", "Engines", "Notes"]);
}

#[test]
fn stored_empty_group_gets_one_blank_entry() {
    let mut store = MemoryStore::new();
    store
        .set(GroupKind::Experience.storage_key(), "[]")
        .unwrap();

    let session = Session::load(store, Theme::Light).unwrap();

    assert_eq!(session.resume().group(GroupKind::Experience).len(), 1);
    assert_eq!(
        session
            .store()
            .get(GroupKind::Experience.storage_key())
            .as_deref(),
        Some("[\"\"]")
    );
}

#[test]
fn skills_preview_is_a_trimmed_list() {
    let mut session = fresh();
    edit(&mut session, SimpleFieldKind::Skills, "Go, Rust ,  , C++");

    assert_eq!(session.preview().skills, vec!["Go", "Rust", "C++"]);
    assert_eq!(
        session.store().get("skillsInput").as_deref(),
        Some("Go, Rust ,  , C++")
    );
}

#[test]
fn last_entry_cannot_be_removed() {
    let mut session = fresh();
    let only = session.resume().group(GroupKind::Certification).entries()[0].id;

    let outcome = session
        .apply(Command::RemoveEntry {
            group: GroupKind::Certification,
            entry: only,
        })
        .unwrap();

    assert_eq!(outcome, Outcome::Warning(KEEP_ONE_ENTRY_WARNING));
    assert_eq!(session.resume().group(GroupKind::Certification).len(), 1);
    assert_eq!(session.pending(), None);
}

#[test]
fn group_entries_reload_in_order_with_empties() {
    let mut session = fresh();
    fill_first_entry(&mut session, GroupKind::Experience, "Engineer, Acme, 2020-2022");
    session.apply(Command::AddEntry(GroupKind::Experience)).unwrap();
    session.apply(Command::AddEntry(GroupKind::Experience)).unwrap();
    let third = session.resume().group(GroupKind::Experience).entries()[2].id;
    session
        .apply(Command::EditEntry {
            group: GroupKind::Experience,
            entry: third,
            value: "Intern, Initech, 2019".to_string(),
        })
        .unwrap();

    let before = session.resume().group(GroupKind::Experience).serialize();
    let session = reload(session);
    let after = session.resume().group(GroupKind::Experience).serialize();

    assert_eq!(before, after);
    assert_eq!(after, vec!["Engineer, Acme, 2020-2022", "", "Intern, Initech, 2019"]);
    assert_eq!(
        session.preview().section(GroupKind::Experience).unwrap().body,
        GroupPreview::Paragraphs(vec![
            "Engineer, Acme, 2020-2022".to_string(),
            "Intern, Initech, 2019".to_string(),
        ])
    );
}

#[test]
fn progress_counts_fields_and_groups() {
    let mut session = fresh();
    edit(&mut session, SimpleFieldKind::Name, "Ada");
    assert_eq!(session.progress().percent, 10);
    assert_eq!(session.progress().label(), "10% complete");

    edit(&mut session, SimpleFieldKind::Email, "ada@example.com");
    edit(&mut session, SimpleFieldKind::Phone, "555");
    edit(&mut session, SimpleFieldKind::Summary, "Mathematician");
    edit(&mut session, SimpleFieldKind::Skills, "Analysis");
    for group in GroupKind::ALL {
        fill_first_entry(&mut session, group, "something");
    }

    let progress = session.progress();
    assert_eq!((progress.completed, progress.total), (10, 10));
    assert_eq!(progress.percent, 100);
}

#[test]
fn export_without_name_aborts_and_focuses_name() {
    let mut session = fresh();
    edit(&mut session, SimpleFieldKind::Email, "ada@example.com");
    session
        .apply(Command::Focus(Focus::Field(SimpleFieldKind::Skills)))
        .unwrap();
    let stored_before: Vec<Option<String>> = SimpleFieldKind::ALL
        .iter()
        .map(|k| session.store().get(k.storage_key()))
        .collect();

    let outcome = session.apply(Command::Export).unwrap();

    assert_eq!(
        outcome,
        Outcome::Invalid {
            field: SimpleFieldKind::Name,
            message: "Please enter your full name".to_string(),
        }
    );
    assert_eq!(session.focus(), Focus::Field(SimpleFieldKind::Name));
    let stored_after: Vec<Option<String>> = SimpleFieldKind::ALL
        .iter()
        .map(|k| session.store().get(k.storage_key()))
        .collect();
    assert_eq!(stored_before, stored_after);
}

#[test]
fn export_checks_email_format() {
    let mut session = fresh();
    edit(&mut session, SimpleFieldKind::Name, "Ada");

    match session.apply(Command::Export).unwrap() {
        Outcome::Invalid { field, message } => {
            assert_eq!(field, SimpleFieldKind::Email);
            assert_eq!(message, "Please enter your email address");
        }
        other => panic!("unexpected outcome {:?}", other),
    }

    edit(&mut session, SimpleFieldKind::Email, "ada@example");
    match session.apply(Command::Export).unwrap() {
        Outcome::Invalid { message, .. } => {
            assert_eq!(message, "Please enter a valid email address");
        }
        other => panic!("unexpected outcome {:?}", other),
    }

    edit(&mut session, SimpleFieldKind::Email, "ada@example.com");
    assert!(matches!(
        session.apply(Command::Export).unwrap(),
        Outcome::Print(_)
    ));
}

#[test]
fn theme_follows_system_until_first_toggle() {
    let session = Session::load(MemoryStore::new(), Theme::Dark).unwrap();
    assert_eq!(session.presentation().theme, Theme::Dark);
    assert_eq!(session.store().get(THEME_KEY), None);

    let session = Session::load(session.into_store(), Theme::Light).unwrap();
    assert_eq!(session.presentation().theme, Theme::Light);

    let mut session = session;
    session.apply(Command::ToggleTheme).unwrap();
    assert_eq!(session.presentation().theme, Theme::Dark);

    let session = Session::load(session.into_store(), Theme::Light).unwrap();
    assert_eq!(session.presentation().theme, Theme::Dark);
}

#[test]
fn clear_all_restarts_from_first_run_state() {
    let mut session = fresh();
    edit(&mut session, SimpleFieldKind::Name, "Ada");
    session.apply(Command::AddEntry(GroupKind::Language)).unwrap();
    session.apply(Command::ToggleTheme).unwrap();

    assert!(matches!(
        session.apply(Command::ClearAll).unwrap(),
        Outcome::ConfirmationRequired(_)
    ));
    assert_eq!(session.apply(Command::Confirm).unwrap(), Outcome::Reset);

    assert_eq!(session.resume().value(SimpleFieldKind::Name), "");
    assert_eq!(session.resume().group(GroupKind::Language).len(), 1);
    assert_eq!(session.presentation().theme, Theme::Light);
    assert_eq!(session.store().get(THEME_KEY), None);
    assert_eq!(session.progress().percent, 0);
}
