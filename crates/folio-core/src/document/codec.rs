//! Codec between stored documents and domain records.

use super::{Collection, Document, FieldValue, Fields};
use crate::domain::{
    ActiveUser, Blog, BlogDraft, BlogPatch, Message, MessageDraft, Project, ProjectDraft, ProjectPatch, Visitor,
};
use crate::error::FolioResult;

/// A domain record stored in one collection.
pub trait Record: Sized {
    const COLLECTION: Collection;

    /// Server-timestamped field the collection is ordered by, newest first.
    const ORDER_FIELD: &'static str = "createdAt";

    fn from_document(doc: &Document) -> FolioResult<Self>;
}

/// Form input turned into the fields written to the store.
pub trait IntoFields {
    fn into_fields(self) -> Fields;
}

/// Raw fields pass through unchanged, e.g. an empty visit record.
impl IntoFields for Fields {
    fn into_fields(self) -> Fields {
        self
    }
}

fn fields<const N: usize>(pairs: [(&str, FieldValue); N]) -> Fields {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

impl Record for Blog {
    const COLLECTION: Collection = Collection::Blogs;

    fn from_document(doc: &Document) -> FolioResult<Self> {
        Ok(Blog {
            id: doc.id.clone(),
            title: doc.require_string("title")?,
            content: doc.string_or("content", ""),
            image_url: doc.string_or("imageURL", ""),
            categories: doc.labels("category"),
            author: doc.string_or("author", Blog::UNKNOWN_AUTHOR),
            tags: doc.labels("tags"),
            featured: doc.bool("featured"),
            published: doc.bool("published"),
            created_at: doc.timestamp("createdAt"),
            updated_at: doc.timestamp("updatedAt"),
        })
    }
}

impl Record for Project {
    const COLLECTION: Collection = Collection::Projects;

    fn from_document(doc: &Document) -> FolioResult<Self> {
        Ok(Project {
            id: doc.id.clone(),
            title: doc.require_string("title")?,
            description: doc.string_or("description", ""),
            image_url: doc.string_or("imageURL", ""),
            live_url: doc.string_or("liveURL", ""),
            github_url: doc.string_or("githubURL", ""),
            categories: doc.labels("category"),
            tags: doc.labels("tags"),
            tech_stack: doc.labels("techStack"),
            published: doc.bool("published"),
            created_at: doc.timestamp("createdAt"),
        })
    }
}

impl Record for Message {
    const COLLECTION: Collection = Collection::Messages;

    fn from_document(doc: &Document) -> FolioResult<Self> {
        Ok(Message {
            id: doc.id.clone(),
            name: doc.string_or("name", ""),
            email: doc.string_or("email", ""),
            message: doc.string_or("message", ""),
            created_at: doc.timestamp("createdAt"),
        })
    }
}

impl Record for Visitor {
    const COLLECTION: Collection = Collection::Visitors;
    const ORDER_FIELD: &'static str = "timestamp";

    fn from_document(doc: &Document) -> FolioResult<Self> {
        Ok(Visitor {
            id: doc.id.clone(),
            timestamp: doc.timestamp("timestamp"),
        })
    }
}

impl Record for ActiveUser {
    const COLLECTION: Collection = Collection::ActiveUsers;
    const ORDER_FIELD: &'static str = "lastActive";

    fn from_document(doc: &Document) -> FolioResult<Self> {
        Ok(ActiveUser {
            id: doc.id.clone(),
            last_active: doc.timestamp("lastActive"),
        })
    }
}

impl IntoFields for BlogDraft {
    fn into_fields(self) -> Fields {
        let tags = self.tag_list();
        fields([
            ("title", FieldValue::string(self.title.trim())),
            ("content", FieldValue::string(self.content)),
            ("imageURL", FieldValue::string(self.image_url)),
            ("category", FieldValue::string(self.category.trim())),
            ("tags", FieldValue::string_array(&tags)),
            ("author", FieldValue::string(self.author.trim())),
            ("featured", false.into()),
            ("published", false.into()),
        ])
    }
}

impl IntoFields for BlogPatch {
    fn into_fields(self) -> Fields {
        fields([
            ("title", FieldValue::string(self.title.trim())),
            ("content", FieldValue::string(self.content)),
            ("author", FieldValue::string(self.author.trim())),
        ])
    }
}

impl IntoFields for ProjectDraft {
    fn into_fields(self) -> Fields {
        let tags = self.tag_list();
        fields([
            ("title", FieldValue::string(self.title.trim())),
            ("description", FieldValue::string(self.description)),
            ("imageURL", FieldValue::string(self.image_url)),
            ("liveURL", FieldValue::string(self.live_url.trim())),
            ("githubURL", FieldValue::string(self.github_url.trim())),
            ("category", FieldValue::string(self.category.trim())),
            ("tags", FieldValue::string_array(&tags)),
            ("published", false.into()),
        ])
    }
}

impl IntoFields for ProjectPatch {
    fn into_fields(self) -> Fields {
        let tags = self.tag_list();
        fields([
            ("title", FieldValue::string(self.title.trim())),
            ("description", FieldValue::string(self.description)),
            ("liveURL", FieldValue::string(self.live_url.trim())),
            ("githubURL", FieldValue::string(self.github_url.trim())),
            ("tags", FieldValue::string_array(&tags)),
        ])
    }
}

impl IntoFields for MessageDraft {
    fn into_fields(self) -> Fields {
        let draft = self.trimmed();
        fields([
            ("name", FieldValue::string(draft.name)),
            ("email", FieldValue::string(draft.email)),
            ("message", FieldValue::string(draft.message)),
        ])
    }
}

/// Partial update flipping a post or project's visibility.
pub fn published_fields(published: bool) -> Fields {
    fields([("published", published.into())])
}
