//! ensure serde is working as expected

use super::*;

#[test]
fn test_serde() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
    struct MyTypes {
        family: NameId,
        custom: NameId,
    }

    let my_instance = MyTypes {
        family: NameId::FAMILY_NAME,
        custom: NameId::new(8214),
    };

    let dumped = serde_json::to_string(&my_instance).unwrap();
    let loaded: MyTypes = serde_json::from_str(&dumped).unwrap();
    assert_eq!(my_instance, loaded)
}
