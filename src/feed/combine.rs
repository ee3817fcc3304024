use super::format::{format_details, html_to_text, sanitize_text};
use super::source::{Collection, NamedCollection, RawPost, TextOrLines};
use super::{FeedRecord, PdfRecord, PostRecord, RecordBody};

/// Merge sources into one feed: source order first, then in-source order.
/// Empty sources contribute nothing.
pub fn combine(sources: Vec<NamedCollection>) -> Vec<FeedRecord> {
    let capacity = sources.iter().map(|s| s.collection.len()).sum();
    let mut records = Vec::with_capacity(capacity);

    for NamedCollection { name, collection } in sources {
        if collection.is_empty() {
            continue;
        }

        let bodies: Vec<RecordBody> = match collection {
            Collection::PdfMetadata(items) => items
                .into_iter()
                .map(|meta| {
                    RecordBody::Pdf(PdfRecord {
                        page_image_urls: meta.images,
                    })
                })
                .collect(),
            Collection::PdfUrls(urls) => urls
                .into_iter()
                .map(|url| {
                    RecordBody::Pdf(PdfRecord {
                        page_image_urls: vec![url],
                    })
                })
                .collect(),
            Collection::BlogPosts(posts) => posts
                .into_iter()
                .map(|post| RecordBody::Post(post_record(post)))
                .collect(),
        };

        records.extend(bodies.into_iter().enumerate().map(|(index, body)| FeedRecord {
            id: format!("{name}-{index}"),
            body,
        }));
    }

    records
}

fn post_record(raw: RawPost) -> PostRecord {
    let summary = raw
        .details
        .map(body_text)
        .or_else(|| raw.content.map(body_text))
        .filter(|text| !text.is_empty());

    let external_doc_urls = raw
        .iframe
        .map(|embed| embed.into_vec())
        .filter(|urls| !urls.is_empty());

    PostRecord {
        title: sanitize_text(raw.title.or(raw.job_title).unwrap_or_default().trim()),
        logo_url: raw.img_src.or(raw.icon_link),
        summary,
        apply_url: raw.apply,
        source_url: raw.href,
        external_doc_urls,
    }
}

fn body_text(body: TextOrLines) -> String {
    match body {
        TextOrLines::Text(html) => html_to_text(&html),
        TextOrLines::Lines(lines) => html_to_text(&format_details(&lines)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::source::{OneOrMany, PdfMetadata};
    use crate::feed::RecordKind;

    fn post(title: &str) -> RawPost {
        RawPost {
            title: Some(title.to_string()),
            details: Some(TextOrLines::Text(format!("<p>{title} details</p>"))),
            ..RawPost::default()
        }
    }

    fn ids(records: &[FeedRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_sources_are_skipped() {
        let sources = vec![
            NamedCollection::new("A", Collection::BlogPosts(vec![post("p1"), post("p2")])),
            NamedCollection::new("B", Collection::BlogPosts(vec![])),
            NamedCollection::new("C", Collection::BlogPosts(vec![post("p3")])),
        ];

        let merged = combine(sources);
        assert_eq!(ids(&merged), vec!["A-0", "A-1", "C-0"]);
        assert_eq!(merged[2].as_post().unwrap().title, "p3");
    }

    #[test]
    fn test_pdf_sources_come_first_when_listed_first() {
        let sources = vec![
            NamedCollection::new(
                "pdf",
                Collection::PdfMetadata(vec![PdfMetadata {
                    images: vec!["/p/1.png".into(), "/p/2.png".into()],
                }]),
            ),
            NamedCollection::new("minopex", Collection::BlogPosts(vec![post("Fitter")])),
        ];

        let merged = combine(sources);
        assert_eq!(merged[0].kind(), RecordKind::Pdf);
        assert_eq!(merged[0].as_pdf().unwrap().page_image_urls.len(), 2);
        assert_eq!(merged[1].id, "minopex-0");
    }

    #[test]
    fn test_pdf_urls_become_single_page_documents() {
        let sources = vec![NamedCollection::new(
            "pdf",
            Collection::PdfUrls(vec!["/a.png".into(), "/b.png".into()]),
        )];
        let merged = combine(sources);
        assert_eq!(ids(&merged), vec!["pdf-0", "pdf-1"]);
        assert_eq!(merged[1].as_pdf().unwrap().page_image_urls, vec!["/b.png"]);
    }

    #[test]
    fn test_post_field_fallbacks() {
        let raw = RawPost {
            job_title: Some("Clerk".into()),
            icon_link: Some("/icon.png".into()),
            content: Some(TextOrLines::Lines(vec!["Apply now. Closing soon".into()])),
            href: Some("https://example.com/job".into()),
            ..RawPost::default()
        };

        let record = post_record(raw);
        assert_eq!(record.title, "Clerk");
        assert_eq!(record.logo_url.as_deref(), Some("/icon.png"));
        assert_eq!(record.source_url.as_deref(), Some("https://example.com/job"));
        let summary = record.summary.unwrap();
        assert!(summary.starts_with("Apply now."));
        assert!(summary.contains("Closing soon"));
    }

    #[test]
    fn test_details_win_over_content() {
        let raw = RawPost {
            title: Some("x".into()),
            details: Some(TextOrLines::Text("<b>details</b>".into())),
            content: Some(TextOrLines::Text("content".into())),
            ..RawPost::default()
        };
        assert_eq!(post_record(raw).summary.as_deref(), Some("details"));
    }

    #[test]
    fn test_embed_only_post() {
        let raw = RawPost {
            title: Some("Gazette".into()),
            iframe: Some(OneOrMany::One("https://drive/preview".into())),
            ..RawPost::default()
        };
        let record = post_record(raw);
        assert!(record.is_embed_only());
        assert!(record.has_body());
        assert_eq!(
            record.external_doc_urls,
            Some(vec!["https://drive/preview".to_string()])
        );
    }
}
