//! XMB bundle output.

#[cfg(test)]
mod tests {
    use angular_i18n::i18n::{serialize_xmb, Message};

    #[test]
    fn should_write_empty_bundle() {
        assert_eq!(serialize_xmb(&[]), "<message-bundle></message-bundle>");
    }

    #[test]
    fn should_write_id_description_and_meaning() {
        let messages = vec![
            Message::new("text".to_string(), Some("m".to_string()), Some("d".to_string())),
            Message::new("plain".to_string(), None, None),
        ];

        assert_eq!(
            serialize_xmb(&messages),
            "<message-bundle>\
             <msg id=\"%24ng%7Cm%7Ctext\" desc=\"d\" meaning=\"m\">text</msg>\
             <msg id=\"%24ng%7C%7Cplain\">plain</msg>\
             </message-bundle>"
        );
    }

    #[test]
    fn should_escape_attribute_values_but_not_placeholders() {
        let messages = vec![Message::new(
            "Hi <ph name=\"0\"/>".to_string(),
            None,
            Some("a \"quoted\" <desc>".to_string()),
        )];

        let xmb = serialize_xmb(&messages);

        assert!(xmb.contains("desc=\"a &quot;quoted&quot; &lt;desc&gt;\""));
        assert!(xmb.contains(">Hi <ph name=\"0\"/></msg>"));
    }
}
