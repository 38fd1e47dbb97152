//! Article model -> entity mapper

use conduit_core::entities::{Article, ArticleSummary, Profile};

use crate::models::{ArticleModel, ArticleSummaryModel};

impl From<ArticleModel> for Article {
    fn from(model: ArticleModel) -> Self {
        Article {
            id: model.id,
            user_id: model.user_id,
            slug: model.slug,
            title: model.title,
            description: model.description,
            body: model.body,
            tag_list: ArticleSummary::parse_tag_list(&model.tags),
            created_at: model.created_at,
            updated_at: model.updated_at,
            favorited: model.favorited,
            favorites_count: model.favorites_count,
            author: Profile {
                username: model.username,
                bio: model.bio,
                image: model.image,
                following: model.following,
            },
        }
    }
}

impl From<ArticleSummaryModel> for ArticleSummary {
    fn from(model: ArticleSummaryModel) -> Self {
        ArticleSummary {
            id: model.id,
            user_id: model.user_id,
            slug: model.slug,
            title: model.title,
            description: model.description,
            tag_list: ArticleSummary::parse_tag_list(&model.tags),
            created_at: model.created_at,
            updated_at: model.updated_at,
            favorited: model.favorited,
            favorites_count: model.favorites_count,
            author: Profile {
                username: model.username,
                bio: model.bio,
                image: model.image,
                following: model.following,
            },
        }
    }
}
