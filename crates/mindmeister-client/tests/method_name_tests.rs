/*
[INPUT]:  Conventional identifiers
[OUTPUT]: Test results for name translation and scope detection
[POS]:    Integration tests - name translation
[UPDATE]: When the naming convention or scope list changes
*/

use mindmeister_client::{ApiScope, MethodName, is_recognized_scope};
use rstest::rstest;

#[rstest]
#[case("maps_get_list", "mm.maps.getList")]
#[case("auth_get_token", "mm.auth.getToken")]
#[case("maps_new_from_template", "mm.maps.newFromTemplate")]
#[case("ideas_toggle_closed", "mm.ideas.toggleClosed")]
#[case("test_echo", "mm.test.echo")]
#[case("realtime_do", "mm.realtime.do")]
fn test_translates_conventional_names(#[case] identifier: &str, #[case] expected: &str) {
    let method = MethodName::from_conventional(identifier).expect("translation");
    assert_eq!(method.as_str(), expected);
    assert_eq!(method.to_string(), expected);
}

#[rstest]
#[case("maps_get_list", true)]
#[case("auth_get_token", true)]
#[case("maps_new_from_template", true)]
#[case("each_index", false)]
#[case("to_i", false)]
#[case("mapsget", false)]
fn test_scope_detection(#[case] identifier: &str, #[case] recognized: bool) {
    assert_eq!(is_recognized_scope(identifier), recognized);
}

#[test]
fn test_every_scope_translates() {
    for scope in ApiScope::ALL {
        let identifier = format!("{scope}_get_list");
        let method = MethodName::from_conventional(&identifier).expect("translation");
        assert_eq!(method.as_str(), format!("mm.{scope}.getList"));
        assert_eq!(method.scope(), scope);
    }
}
