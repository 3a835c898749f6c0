use tabstore::ui::mvi::Reducer;
use tabstore::ui::profile::{ProfileBinding, ProfileIntent, ProfileReducer, ProfileState};

#[test]
fn default_nickname_is_guest() {
    assert_eq!(ProfileState::default().nickname, "Guest");
}

#[test]
fn nickname_binding_sets_value() {
    let state = ProfileReducer::reduce(
        ProfileState::default(),
        ProfileIntent::Binding(ProfileBinding::Nickname("Alice".into())),
    );
    assert_eq!(state.nickname, "Alice");
}

#[test]
fn same_nickname_twice_is_idempotent() {
    let intent = ProfileIntent::Binding(ProfileBinding::Nickname("Alice".into()));
    let once = ProfileReducer::reduce(ProfileState::default(), intent.clone());
    let twice = ProfileReducer::reduce(once.clone(), intent);
    assert_eq!(once, twice);
}

#[test]
fn binding_parses_from_field_name() {
    let binding = ProfileBinding::parse("nickname", "Bob").unwrap();
    let state = ProfileReducer::reduce(ProfileState::default(), ProfileIntent::Binding(binding));
    assert_eq!(state.nickname, "Bob");
}
