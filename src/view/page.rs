use super::card::escape_html;
use super::{Containers, Element};

pub const LOADING_ID: &str = "loading";
pub const ERROR_ID: &str = "error";
pub const ORDERS_ID: &str = "orders";

const HIDDEN_CLASS: &str = "hidden";

const LOADING_TEXT: &str = "Загрузка заказов...";
const ERROR_TEXT: &str = "Не удалось загрузить заказы. Попробуйте обновить страницу.";

/// In-memory stand-in for a DOM element: id, CSS classes, inner HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
    id: String,
    classes: Vec<String>,
    inner_html: String,
}

impl PageElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            classes: Vec::new(),
            inner_html: String::new(),
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.inner_html = html.into();
        self
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    fn add_class(&mut self, class: &str) {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    fn to_html(&self) -> String {
        format!(
            r#"<div id="{}" class="{}">{}</div>"#,
            escape_html(&self.id),
            escape_html(&self.classes.join(" ")),
            self.inner_html
        )
    }
}

impl Element for PageElement {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_hidden(&self) -> bool {
        self.classes.iter().any(|c| c == HIDDEN_CLASS)
    }

    fn set_hidden(&mut self, hidden: bool) {
        if hidden {
            self.add_class(HIDDEN_CLASS);
        } else {
            self.remove_class(HIDDEN_CLASS);
        }
    }

    fn inner_html(&self) -> &str {
        &self.inner_html
    }

    fn set_inner_html(&mut self, html: String) {
        self.inner_html = html;
    }
}

pub type HtmlPage = Containers<PageElement>;

impl Containers<PageElement> {
    /// The board's three containers with their static texts.
    pub fn page() -> Self {
        Self::new(
            PageElement::new(LOADING_ID)
                .with_class("loading")
                .with_html(LOADING_TEXT),
            PageElement::new(ERROR_ID)
                .with_class("error")
                .with_html(ERROR_TEXT),
            PageElement::new(ORDERS_ID).with_class("orders"),
        )
    }

    /// Full HTML document around the three containers.
    pub fn to_document(&self, title: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="stylesheet" href="style.css">
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
        {loading}
        {error}
        {orders}
    </div>
</body>
</html>
"#,
            title = escape_html(title),
            loading = self.loading.to_html(),
            error = self.error.to_html(),
            orders = self.orders.to_html(),
        )
    }
}
