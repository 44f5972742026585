//! ensure serde is working as expected

use super::*;

#[test]
fn test_serde() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
    struct MyTypes {
        name_id: NameId,
        platform: PlatformId,
        other_platform: PlatformId,
        key: NameKey,
    }

    let my_instance = MyTypes {
        name_id: NameId::new(8214),
        platform: PlatformId::Windows,
        other_platform: PlatformId::Other(42),
        key: NameKey::new(3, 1, 0x0409, NameId::FAMILY_NAME),
    };

    let dumped = serde_json::to_string(&my_instance).unwrap();
    let loaded: MyTypes = serde_json::from_str(&dumped).unwrap();
    assert_eq!(my_instance, loaded)
}
