//! Outbound string sanitization.
//!
//! Every string that leaves the API passes through [`clean`]. Script and style
//! elements are dropped together with their content, any other tag that is not
//! on ammonia's safe list is stripped, and the remaining text is HTML-encoded.

/// Strip unsafe markup from `input`.
pub fn clean(input: &str) -> String {
    ammonia::clean(input)
}

/// Types whose string fields must be cleaned before they are serialized into a response.
pub trait Sanitize {
    fn sanitize(self) -> Self;
}

impl<T: Sanitize> Sanitize for Vec<T> {
    fn sanitize(self) -> Self {
        self.into_iter().map(Sanitize::sanitize).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_script_with_content() {
        assert_eq!(clean("<script>alert('x')</script>Nunc Incorporated"), "Nunc Incorporated");
    }

    #[test]
    fn strips_event_handler_attributes() {
        let out = clean(r#"<img src="x.png" onerror="alert(1)">"#);
        assert!(!out.contains("onerror"));
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(clean("(731) 941-8164"), "(731) 941-8164");
        assert_eq!(clean("Suspendisse@pharetranibhAliquam.co.uk"), "Suspendisse@pharetranibhAliquam.co.uk");
        assert_eq!(clean("It's a periodic expense"), "It's a periodic expense");
    }

    #[test]
    fn vec_sanitizes_every_item() {
        struct Name(String);
        impl Sanitize for Name {
            fn sanitize(self) -> Self { Name(clean(&self.0)) }
        }
        let cleaned = vec![Name("<script>x</script>a".into()), Name("b".into())].sanitize();
        let names: Vec<_> = cleaned.into_iter().map(|n| n.0).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
