use markup_render_macros::generate_escape_table;

type EscapeTable = [Option<&'static str>; 256];

generate_escape_table! {
    HTML_TEXT,
    b'&' => "&amp;",
    b'<' => "&lt;",
    b'>' => "&gt;",
}

generate_escape_table! {
    HTML_ATTRIBUTE,
    b'&' => "&amp;",
    b'<' => "&lt;",
    b'>' => "&gt;",
    b'"' => "&quot;",
}

/// Splits text into the pieces that make up its escaped form: runs that need
/// no escaping borrow from the input, and each escaped byte is its
/// replacement entity from the table.
///
/// Joining every item gives the escaped text.
pub struct EscapedChunks<'a> {
    rest: &'a str,
    table: &'static EscapeTable,
    entity: Option<&'static str>,
}

impl<'a> EscapedChunks<'a> {
    fn new(text: &'a str, table: &'static EscapeTable) -> Self {
        Self {
            rest: text,
            table,
            entity: None,
        }
    }
}

impl<'a> Iterator for EscapedChunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(entity) = self.entity.take() {
            return Some(entity);
        }
        if self.rest.is_empty() {
            return None;
        }

        let table = self.table;
        let Some(split) = self.rest.bytes().position(|byte| table[byte as usize].is_some()) else {
            return Some(std::mem::take(&mut self.rest));
        };

        // Table keys are ASCII, so `split` and `split + 1` are char boundaries.
        let (plain, tail) = self.rest.split_at(split);
        let entity = table[tail.as_bytes()[0] as usize];
        self.rest = &tail[1..];
        if plain.is_empty() {
            entity
        } else {
            self.entity = entity;
            Some(plain)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let queued = usize::from(self.entity.is_some());
        let more = usize::from(!self.rest.is_empty());
        // Every remaining byte could be its own item.
        (queued + more, Some(queued + self.rest.len()))
    }
}

pub fn escape_text(text: &str) -> EscapedChunks {
    EscapedChunks::new(text, &HTML_TEXT_ESCAPE_TABLE)
}

pub fn escape_attribute_value(text: &str) -> EscapedChunks {
    EscapedChunks::new(text, &HTML_ATTRIBUTE_ESCAPE_TABLE)
}

/// Append `text` to `buffer` with `&`, `<` and `>` escaped.
pub(crate) fn push_escaped_text(buffer: &mut String, text: &str) {
    // Most text has nothing to escape, so a quick scan avoids chunking it.
    if memchr::memchr3(b'&', b'<', b'>', text.as_bytes()).is_none() {
        buffer.push_str(text);
        return;
    }
    push_str_iter(buffer, escape_text(text));
}

/// Append `text` to `buffer` with `&`, `<`, `>` and `"` escaped.
pub(crate) fn push_escaped_attribute_value(buffer: &mut String, text: &str) {
    let bytes = text.as_bytes();
    if memchr::memchr3(b'&', b'<', b'>', bytes).is_none() && memchr::memchr(b'"', bytes).is_none() {
        buffer.push_str(text);
        return;
    }
    push_str_iter(buffer, escape_attribute_value(text));
}

fn push_str_iter<'a>(buffer: &mut String, iter: impl Iterator<Item = &'a str>) {
    for chunk in iter {
        buffer.push_str(chunk);
    }
}

#[cfg(test)]
mod test {
    use super::{escape_attribute_value, escape_text, push_escaped_attribute_value, push_escaped_text};

    fn collect<'a>(iter: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
        iter.collect()
    }

    #[test]
    fn test_text_chunks() {
        assert_eq!(
            vec!["a", "&lt;", "b", "&amp;", "c"],
            collect(escape_text("a<b&c"))
        );
        assert_eq!(vec!["\"quoted\""], collect(escape_text("\"quoted\"")));
        assert!(collect(escape_text("")).is_empty());
    }

    #[test]
    fn test_attribute_chunks() {
        assert_eq!(
            vec!["say ", "&quot;", "hi", "&quot;"],
            collect(escape_attribute_value("say \"hi\""))
        );
        assert_eq!(vec!["&gt;", "&gt;"], collect(escape_attribute_value(">>")));
    }

    #[test]
    fn test_chunks_join_to_escaped_text() {
        let text = "<<a & \"b\">>";
        let chunks = collect(escape_attribute_value(text));
        assert_eq!(
            vec!["&lt;", "&lt;", "a ", "&amp;", " ", "&quot;", "b", "&quot;", "&gt;", "&gt;"],
            chunks
        );
        assert_eq!("&lt;&lt;a &amp; &quot;b&quot;&gt;&gt;", chunks.concat());

        let mut iter = escape_text("ab<");
        assert_eq!((1, Some(3)), iter.size_hint());
        assert_eq!(Some("ab"), iter.next());
        assert_eq!((1, Some(1)), iter.size_hint());
        assert_eq!(Some("&lt;"), iter.next());
        assert_eq!((0, Some(0)), iter.size_hint());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_multibyte_text_is_preserved() {
        let mut buffer = String::new();
        push_escaped_text(&mut buffer, "これは<b>だ");
        assert_eq!("これは&lt;b&gt;だ", buffer);
    }

    #[test]
    fn test_push_without_escapes() {
        let mut buffer = String::from("x");
        push_escaped_attribute_value(&mut buffer, "plain value");
        assert_eq!("xplain value", buffer);
    }
}
