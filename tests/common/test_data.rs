use petstore_suite::model::Pet;
use petstore_suite::PetStatus;

/// 示例宠物 id
pub const EXAMPLE_PET_ID: i64 = 42_000_000;

/// 生成固定的示例宠物
pub fn example_pet() -> Pet {
    Pet {
        id: EXAMPLE_PET_ID,
        name: "TestPet".to_string(),
        photo_urls: vec!["http://example.com/photo.jpg".to_string()],
        status: PetStatus::Available,
    }
}
