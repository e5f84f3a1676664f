//! Search-engine metadata for blog posts.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::domain::Blog;
use crate::text::excerpt;

/// Length of meta descriptions and JSON-LD descriptions.
pub const DESCRIPTION_CHARS: usize = 150;

/// Site-level facts embedded in every post's metadata.
#[derive(Debug, Clone, Copy)]
pub struct SeoContext<'a> {
    pub site_name: &'a str,
    pub author: &'a str,
    pub logo_url: &'a str,
}

/// `{title} | {site}`
pub fn document_title(title: &str, site_name: &str) -> String {
    format!("{} | {}", title, site_name)
}

/// First characters of the post body, cut without an ellipsis.
pub fn meta_description(content: &str) -> String {
    content.trim().chars().take(DESCRIPTION_CHARS).collect()
}

/// schema.org `BlogPosting`. `page_url` is set on the single-post page.
pub fn blog_posting(blog: &Blog, ctx: &SeoContext<'_>, page_url: Option<&str>, now: DateTime<Utc>) -> Value {
    let published = blog.created_at.unwrap_or(now);
    let modified = blog.updated_at.unwrap_or(published);
    let description = match meta_description(&blog.content) {
        d if d.is_empty() => "Read this blog post for more details.".to_string(),
        d => d,
    };
    let image = if blog.image_url.is_empty() { ctx.logo_url } else { &blog.image_url };
    let keywords = if blog.tags.is_empty() {
        "blog, articles, web".to_string()
    } else {
        blog.tags.join(", ")
    };

    let mut posting = json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": excerpt(&blog.title, 110),
        "description": description,
        "image": image,
        "author": { "@type": "Person", "name": blog.author },
        "publisher": {
            "@type": "Person",
            "name": ctx.author,
            "logo": { "@type": "ImageObject", "url": ctx.logo_url }
        },
        "datePublished": published.to_rfc3339(),
        "dateModified": modified.to_rfc3339(),
        "keywords": keywords,
        "about": blog.categories.first().map(String::as_str).unwrap_or("General"),
        "isPartOf": { "@type": "Blog", "name": ctx.site_name },
    });
    if let Some(url) = page_url {
        posting["mainEntityOfPage"] = json!({ "@type": "WebPage", "@id": url });
    }
    posting
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const CTX: SeoContext<'static> = SeoContext {
        site_name: "Folio",
        author: "Ada",
        logo_url: "https://site/logo.png",
    };

    #[test]
    fn test_title_and_description() {
        assert_eq!(document_title("Post", "Folio"), "Post | Folio");
        let long = "x".repeat(400);
        assert_eq!(meta_description(&long).chars().count(), 150);
        assert_eq!(meta_description("  short "), "short");
    }

    #[test]
    fn test_blog_posting_defaults() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let blog = Blog::new("b1", "Hello");
        let ld = blog_posting(&blog, &CTX, None, now);
        assert_eq!(ld["@type"], "BlogPosting");
        assert_eq!(ld["image"], "https://site/logo.png");
        assert_eq!(ld["keywords"], "blog, articles, web");
        assert_eq!(ld["about"], "General");
        assert_eq!(ld["author"]["name"], "Unknown");
        assert_eq!(ld["datePublished"], now.to_rfc3339());
        assert!(ld.get("mainEntityOfPage").is_none());
    }

    #[test]
    fn test_blog_posting_from_fields() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let mut blog = Blog::new("b1", "Hello");
        blog.tags = vec!["rust".into(), "web".into()];
        blog.categories = vec!["Dev".into()];
        blog.image_url = "https://img/1.png".into();
        blog.created_at = Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
        let ld = blog_posting(&blog, &CTX, Some("https://site/blog/post?id=b1"), now);
        assert_eq!(ld["keywords"], "rust, web");
        assert_eq!(ld["about"], "Dev");
        assert_eq!(ld["dateModified"], ld["datePublished"]);
        assert_eq!(ld["mainEntityOfPage"]["@id"], "https://site/blog/post?id=b1");
    }
}
