use crate::{domain::recommendation::entities::MealRecommendation, entity::recommendations};

impl From<recommendations::Model> for MealRecommendation {
    fn from(model: recommendations::Model) -> Self {
        Self {
            id: model.id,
            image: model.image,
            name: model.name,
        }
    }
}
