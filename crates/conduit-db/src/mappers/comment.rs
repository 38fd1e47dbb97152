//! Comment model -> entity mapper

use conduit_core::entities::{Comment, Profile};

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            article_id: model.article_id,
            user_id: model.user_id,
            body: model.body,
            created_at: model.created_at,
            updated_at: model.updated_at,
            author: Profile {
                username: model.username,
                bio: model.bio,
                image: model.image,
                following: model.following,
            },
        }
    }
}
