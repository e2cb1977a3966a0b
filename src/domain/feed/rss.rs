//! RSS 2.0 templating with Atom self-link, `content:encoded` and Dublin Core creator.

use std::fmt::Write;

use crate::domain::foundation::Timestamp;

/// Channel-level metadata.
#[derive(Debug, Clone)]
pub struct FeedChannel {
    pub title: String,
    pub description: String,
    /// Site base URL without trailing slash.
    pub link: String,
    pub language: String,
    pub generator: String,
    /// Written as `dc:creator` on every item.
    pub author: String,
    pub last_build_date: Timestamp,
}

/// One entry of the feed.
#[derive(Debug, Clone)]
pub struct FeedItem {
    pub title: String,
    /// Absolute permalink, also used as the guid.
    pub link: String,
    pub pub_date: Timestamp,
    /// Plain-text summary.
    pub description: String,
    /// Full rendered HTML.
    pub content_html: String,
    pub categories: Vec<String>,
}

/// A feed ready to be rendered.
#[derive(Debug, Clone)]
pub struct RssDocument {
    pub channel: FeedChannel,
    pub items: Vec<FeedItem>,
}

impl RssDocument {
    pub fn new(channel: FeedChannel, items: Vec<FeedItem>) -> Self {
        Self { channel, items }
    }

    /// Renders the XML document.
    pub fn render(&self) -> String {
        let channel = &self.channel;
        let mut xml = String::with_capacity(1024 + self.items.len() * 2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" ?>"#);
        xml.push('\n');
        xml.push_str(concat!(
            r#"<rss version="2.0""#,
            "\n  ",
            r#"xmlns:atom="http://www.w3.org/2005/Atom""#,
            "\n  ",
            r#"xmlns:content="http://purl.org/rss/1.0/modules/content/""#,
            "\n  ",
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/">"#,
            "\n<channel>\n"
        ));

        // Writing into a String cannot fail.
        let _ = write!(
            xml,
            concat!(
                "  <title>{title}</title>\n",
                "  <description>{description}</description>\n",
                "  <link>{link}</link>\n",
                "  <atom:link href=\"{link}/feed.xml\" rel=\"self\" type=\"application/rss+xml\"/>\n",
                "  <language>{language}</language>\n",
                "  <lastBuildDate>{build}</lastBuildDate>\n",
                "  <generator>{generator}</generator>\n"
            ),
            title = escape_xml(&channel.title),
            description = escape_xml(&channel.description),
            link = escape_xml(&channel.link),
            language = escape_xml(&channel.language),
            build = channel.last_build_date.to_rfc1123(),
            generator = escape_xml(&channel.generator),
        );

        for item in &self.items {
            let link = escape_xml(&item.link);
            let _ = write!(
                xml,
                concat!(
                    "  <item>\n",
                    "    <title>{title}</title>\n",
                    "    <link>{link}</link>\n",
                    "    <guid isPermaLink=\"true\">{link}</guid>\n",
                    "    <pubDate>{date}</pubDate>\n",
                    "    <dc:creator>{creator}</dc:creator>\n",
                    "    <description>{description}</description>\n",
                    "    <content:encoded>{content}</content:encoded>\n"
                ),
                title = cdata(&item.title),
                link = link,
                date = item.pub_date.to_rfc1123(),
                creator = cdata(&channel.author),
                description = cdata(&item.description),
                content = cdata(&item.content_html),
            );
            for category in &item.categories {
                let _ = writeln!(xml, "    <category>{}</category>", escape_xml(category));
            }
            xml.push_str("  </item>\n");
        }

        xml.push_str("</channel>\n</rss>\n");
        xml
    }
}

/// Characters allowed by the XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
        || ('\u{20}'..='\u{D7FF}').contains(&c)
        || ('\u{E000}'..='\u{FFFD}').contains(&c)
        || c >= '\u{10000}'
}

/// Wraps text in a CDATA section, splitting any embedded `]]>`.
///
/// Characters XML cannot carry at all (e.g. terminal escapes) are dropped.
pub fn cdata(text: &str) -> String {
    let clean: String = text.chars().filter(|c| is_xml_char(*c)).collect();
    format!("<![CDATA[{}]]>", clean.replace("]]>", "]]]]><![CDATA[>"))
}

/// Escapes the five XML special characters and drops non-XML characters.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars().filter(|c| is_xml_char(*c)) {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse_rfc3339(s).unwrap()
    }

    fn channel() -> FeedChannel {
        FeedChannel {
            title: "LinHeMa de Blog".to_string(),
            description: "Notes & thoughts".to_string(),
            link: "https://lulu-ulul.vercel.app".to_string(),
            language: "en-us".to_string(),
            generator: "lulu-blog".to_string(),
            author: "LinHeMa".to_string(),
            last_build_date: ts("2024-06-01T00:00:00Z"),
        }
    }

    fn item(n: u32, title: &str, categories: &[&str]) -> FeedItem {
        FeedItem {
            title: title.to_string(),
            link: format!("https://lulu-ulul.vercel.app/blog/{}", n),
            pub_date: ts("2024-05-20T09:15:00Z"),
            description: "Summary".to_string(),
            content_html: "<p>Body</p>".to_string(),
            categories: categories.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn renders_channel_metadata() {
        let xml = RssDocument::new(channel(), vec![]).render();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>"));
        assert!(xml.contains("<title>LinHeMa de Blog</title>"));
        assert!(xml.contains("<description>Notes &amp; thoughts</description>"));
        assert!(xml.contains(
            "<atom:link href=\"https://lulu-ulul.vercel.app/feed.xml\" rel=\"self\" type=\"application/rss+xml\"/>"
        ));
        assert!(xml.contains("<lastBuildDate>Sat, 01 Jun 2024 00:00:00 GMT</lastBuildDate>"));
        assert!(xml.trim_end().ends_with("</channel>\n</rss>"));
        assert!(!xml.contains("<item>"));
    }

    #[test]
    fn renders_one_item_per_entry() {
        let items = vec![item(1, "One", &["go"]), item(2, "Two", &[]), item(3, "Three", &[])];
        let xml = RssDocument::new(channel(), items).render();
        assert_eq!(xml.matches("<item>").count(), 3);
        assert_eq!(xml.matches("</item>").count(), 3);
        assert!(xml.contains("<guid isPermaLink=\"true\">https://lulu-ulul.vercel.app/blog/2</guid>"));
        assert!(xml.contains("<pubDate>Mon, 20 May 2024 09:15:00 GMT</pubDate>"));
        assert!(xml.contains("<dc:creator><![CDATA[LinHeMa]]></dc:creator>"));
        assert!(xml.contains("<content:encoded><![CDATA[<p>Body</p>]]></content:encoded>"));
        assert!(xml.contains("<category>go</category>"));
    }

    #[test]
    fn titles_are_cdata_wrapped() {
        let xml = RssDocument::new(channel(), vec![item(1, "Rust <3 & you", &[])]).render();
        assert!(xml.contains("<title><![CDATA[Rust <3 & you]]></title>"));
    }

    #[test]
    fn categories_are_escaped() {
        let xml = RssDocument::new(channel(), vec![item(1, "x", &["c&c"])]).render();
        assert!(xml.contains("<category>c&amp;c</category>"));
    }

    #[test]
    fn cdata_splits_terminator() {
        assert_eq!(cdata("a]]>b"), "<![CDATA[a]]]]><![CDATA[>b]]>");
        assert_eq!(cdata("plain"), "<![CDATA[plain]]>");
    }

    #[test]
    fn escape_xml_handles_all_specials() {
        assert_eq!(escape_xml(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&apos;&amp;&apos;&lt;/a&gt;");
    }

    #[test]
    fn control_characters_never_reach_the_feed() {
        let mut entry = item(1, "Terminal \u{1b}[31mred\u{1b}[0m", &["a\u{7}b"]);
        entry.description = "bell\u{7} and nul\u{0}".to_string();
        entry.content_html = "<pre>\u{1b}[1mbold</pre>".to_string();
        let xml = RssDocument::new(channel(), vec![entry]).render();

        assert!(xml.chars().all(is_xml_char));
        assert!(xml.contains("<title><![CDATA[Terminal [31mred[0m]]></title>"));
        assert!(xml.contains("<category>ab</category>"));
        assert!(xml.contains("<![CDATA[bell and nul]]>"));
    }

    #[test]
    fn whitespace_and_astral_characters_survive() {
        assert_eq!(escape_xml("a\tb\nc\r🦀"), "a\tb\nc\r🦀");
        assert_eq!(cdata("\u{FFFE}ok"), "<![CDATA[ok]]>");
    }
}
