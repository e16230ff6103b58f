//! HTML pages.
//!
//! Every page shares one layout; dynamic values are escaped before they are
//! inserted.

const STYLE: &str = "body{font-family:sans-serif;max-width:32rem;margin:2rem auto;padding:0 1rem}\
label{display:block;margin-top:.75rem}input[type=text],input[type=password],input[type=number]{width:100%}\
nav a{margin-right:1rem}code{font-size:1.25rem}";

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>hashpass - {title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <nav><a href=\"/\">Generate</a><a href=\"/about\">About</a></nav>\n{body}\n</body>\n</html>\n"
    )
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn form_page() -> String {
    layout(
        "Generate",
        "<h1>Generate a password</h1>\n\
         <form method=\"post\" action=\"/generate\" autocomplete=\"off\">\n\
         <label>Master password <input type=\"password\" name=\"password\" required></label>\n\
         <label>Confirm master password <input type=\"password\" name=\"confirm-password\" required></label>\n\
         <label>Domain <input type=\"text\" name=\"domain\" required></label>\n\
         <label>Additional info <input type=\"text\" name=\"additional-info\"></label>\n\
         <label>Password length <input type=\"number\" name=\"password-length\" value=\"12\" min=\"1\" max=\"44\"></label>\n\
         <label>Special characters <select name=\"special-characters\">\
         <option value=\"true\" selected>Yes</option><option value=\"false\">No</option></select></label>\n\
         <p><button type=\"submit\">Generate</button></p>\n\
         </form>",
    )
}

pub fn about_page() -> String {
    layout(
        "About",
        "<h1>About</h1>\n\
         <p>Passwords are derived from your master password, the domain and any additional \
         info. Nothing is stored: entering the same values again gives the same password.</p>\n\
         <p>Change the additional info (for example to a counter) to get a new password for \
         the same domain.</p>",
    )
}

/// Copies the result field; falls back to a selection copy where the
/// clipboard API is unavailable (plain http on a non-loopback host).
const COPY_SCRIPT: &str = "var f=document.getElementById('password');\
if(navigator.clipboard){navigator.clipboard.writeText(f.value)}\
else{f.select();document.execCommand('copy')}";

pub fn result_page(password: &str) -> String {
    layout(
        "Result",
        &format!(
            "<h1>Your password</h1>\n\
             <p><input id=\"password\" type=\"text\" readonly value=\"{}\" onfocus=\"this.select()\"></p>\n\
             <p><button type=\"button\" onclick=\"{COPY_SCRIPT}\">Copy</button></p>\n\
             <p><a href=\"/\">Generate another</a></p>",
            escape_html(password)
        ),
    )
}

pub fn error_page(headline: &str, detail: &str) -> String {
    layout(
        "Error",
        &format!(
            "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back</a></p>",
            escape_html(headline),
            escape_html(detail)
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<,}+"), "&lt;,}+");
        assert_eq!(escape_html("`~]'"), "`~]&#39;");
        assert_eq!(escape_html("a&\"b"), "a&amp;&quot;b");
    }

    #[test]
    fn test_form_page_has_all_fields() {
        let page = form_page();
        for name in [
            "password",
            "confirm-password",
            "domain",
            "additional-info",
            "password-length",
            "special-characters",
        ] {
            assert!(page.contains(&format!("name=\"{}\"", name)), "{}", name);
        }
    }

    #[test]
    fn test_result_page_escapes_password() {
        let page = result_page("abc<,}+");
        assert!(page.contains("value=\"abc&lt;,}+\""));
    }

    #[test]
    fn test_result_page_has_copy_button() {
        let page = result_page("B8MYkTQT`~]'");
        assert!(page.contains("id=\"password\""));
        assert!(page.contains("getElementById('password')"));
        assert!(page.contains(">Copy</button>"));
    }
}
