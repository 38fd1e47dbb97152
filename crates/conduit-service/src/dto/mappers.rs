//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use conduit_core::{Article, ArticleSummary, Comment, Profile, User};

use super::responses::{
    ArticleResponse, ArticleSummaryResponse, CommentResponse, ProfileResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl UserResponse {
    /// Pair a user with the credential the client should use
    pub fn new(user: User, token: String) -> Self {
        Self {
            email: user.email,
            token,
            username: user.username,
            bio: user.bio,
            image: user.image,
        }
    }
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            username: profile.username,
            bio: profile.bio,
            image: profile.image,
            following: profile.following,
        }
    }
}

// ============================================================================
// Article Mappers
// ============================================================================

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            slug: article.slug,
            title: article.title,
            description: article.description,
            body: article.body,
            tag_list: article.tag_list,
            created_at: article.created_at,
            updated_at: article.updated_at,
            favorited: article.favorited,
            favorites_count: article.favorites_count,
            author: article.author.into(),
        }
    }
}

impl From<ArticleSummary> for ArticleSummaryResponse {
    fn from(article: ArticleSummary) -> Self {
        Self {
            slug: article.slug,
            title: article.title,
            description: article.description,
            tag_list: article.tag_list,
            created_at: article.created_at,
            updated_at: article.updated_at,
            favorited: article.favorited,
            favorites_count: article.favorites_count,
            author: article.author.into(),
        }
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            body: comment.body,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            author: comment.author.into(),
        }
    }
}
