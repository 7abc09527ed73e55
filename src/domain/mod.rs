pub mod order;
pub mod time;

pub use order::Order;

// ==================================================
// FIELD CATALOG
// ==================================================

/// A display field: aliases in lookup order (current schema first, then the
/// legacy name) and the text shown when none of them holds a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub aliases: &'static [&'static str],
    pub placeholder: &'static str,
}

pub const ID: Field = Field {
    aliases: &["id", "uuid"],
    placeholder: "N/A",
};

pub const TITLE: Field = Field {
    aliases: &["title"],
    placeholder: "Без названия",
};

pub const DESCRIPTION: Field = Field {
    aliases: &["description"],
    placeholder: "Не указано",
};

pub const CUSTOMER: Field = Field {
    aliases: &["customer_name", "customer"],
    placeholder: "Не указано",
};

pub const PHONE: Field = Field {
    aliases: &["customer_phone", "phone"],
    placeholder: "нет телефона",
};

pub const ORIGIN: Field = Field {
    aliases: &["from_location", "from"],
    placeholder: "Не указано",
};

pub const DESTINATION: Field = Field {
    aliases: &["to_location", "to"],
    placeholder: "Не указано",
};

pub const WEIGHT: Field = Field {
    aliases: &["weight_kg", "weight"],
    placeholder: "Не указан",
};

pub const PRICE: Field = Field {
    aliases: &["price"],
    placeholder: "Не указана",
};

/// Legacy pre-formatted dimensions, used when the numeric parts are missing.
pub const DIMENSIONS: Field = Field {
    aliases: &["dimensions"],
    placeholder: "Не указаны",
};

/// Numeric dimension components, all three required.
pub const DIMENSION_PARTS: [&str; 3] = ["length_cm", "width_cm", "height_cm"];

pub const CREATED_AT: Field = Field {
    aliases: &["created_at"],
    placeholder: "Не указана",
};

/// Legacy pre-formatted date string.
pub const DATE: Field = Field {
    aliases: &["date"],
    placeholder: "Не указана",
};

pub const TAGS: Field = Field {
    aliases: &["tags"],
    placeholder: "",
};

/// Legacy "no tags" marker sent as a plain string.
pub const NO_TAGS_SENTINEL: &str = "Нет тегов";

/// Legacy ids are the first 8 characters of the uuid.
pub const SHORT_ID_LEN: usize = 8;
