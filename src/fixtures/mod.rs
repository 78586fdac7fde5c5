//! Schema fixtures shared by unit tests.

/// A single app with forward and reverse relations, unique fields, choices
/// and a model without required fields.
pub const LIBRARY: &str = r#"{
  "apps": [
    {
      "label": "library",
      "models": [
        {
          "name": "Publisher",
          "fields": [
            { "name": "name", "type": "CharField", "max_length": 30, "unique": true },
            { "name": "website", "type": "URLField", "blank": true }
          ]
        },
        {
          "name": "Author",
          "fields": [
            { "name": "name", "type": "CharField", "max_length": 5 },
            { "name": "email", "type": "EmailField", "unique": true },
            { "name": "birth_date", "type": "DateField" },
            { "name": "bio", "type": "TextField", "blank": true },
            { "name": "status", "type": "CharField", "choices": [["a", "Active"], ["r", "Retired"]] },
            { "name": "rating", "type": "PositiveSmallIntegerField", "default": 3 }
          ]
        },
        {
          "name": "Book",
          "fields": [
            { "name": "title", "type": "CharField", "max_length": 60 },
            { "name": "slug", "type": "SlugField", "unique": true },
            { "name": "author", "type": "ForeignKey", "to": "Author" },
            { "name": "publisher", "type": "ForeignKey", "to": "library.Publisher" },
            { "name": "published", "type": "DateTimeField" },
            { "name": "pages", "type": "PositiveIntegerField" },
            { "name": "in_print", "type": "BooleanField" }
          ]
        },
        {
          "name": "Review",
          "fields": [
            { "name": "book", "type": "ForeignKey", "to": "Book" },
            { "name": "stars", "type": "SmallIntegerField",
              "choices": [[1, "One"], [2, "Two"], [3, "Three"], [4, "Four"], [5, "Five"]] },
            { "name": "posted_at", "type": "TimeField" },
            { "name": "helpful", "type": "NullBooleanField", "null": true },
            { "name": "body", "type": "TextField" }
          ]
        },
        {
          "name": "Tag",
          "fields": [
            { "name": "label", "type": "CharField", "blank": true },
            { "name": "weight", "type": "IntegerField", "default": 1 },
            { "name": "hidden", "type": "NullBooleanField", "null": true }
          ]
        }
      ]
    }
  ]
}"#;

/// Relation across two apps.
pub const CROSS_APP: &str = r#"{
  "apps": [
    {
      "label": "accounts",
      "models": [
        { "name": "Customer", "fields": [{ "name": "name", "type": "CharField" }] }
      ]
    },
    {
      "label": "shop",
      "models": [
        {
          "name": "Order",
          "fields": [
            { "name": "customer", "type": "ForeignKey", "to": "accounts.Customer" },
            { "name": "total", "type": "IntegerField" }
          ]
        }
      ]
    }
  ]
}"#;

/// One-to-one relation: each person holds at most one passport.
pub const ONE_TO_ONE: &str = r#"{
  "apps": [
    {
      "label": "people",
      "models": [
        { "name": "Person", "fields": [{ "name": "name", "type": "CharField" }] },
        {
          "name": "Passport",
          "fields": [
            { "name": "holder", "type": "OneToOneField", "to": "Person" },
            { "name": "number", "type": "SlugField", "unique": true, "max_length": 12 }
          ]
        }
      ]
    }
  ]
}"#;

/// Two models that each require a row of the other.
pub const CYCLE: &str = r#"{
  "apps": [
    {
      "label": "loop",
      "models": [
        { "name": "Left", "fields": [{ "name": "peer", "type": "ForeignKey", "to": "Right" }] },
        { "name": "Right", "fields": [{ "name": "peer", "type": "ForeignKey", "to": "Left" }] }
      ]
    }
  ]
}"#;

/// A unique boolean can only hold two distinct values.
pub const NARROW_UNIQUE: &str = r#"{
  "apps": [
    {
      "label": "flags",
      "models": [
        { "name": "Switch", "fields": [{ "name": "enabled", "type": "BooleanField", "unique": true }] }
      ]
    }
  ]
}"#;

/// Reverse relations that loop back: Gamma points at Beta, Beta at Alpha,
/// and Alpha optionally at Gamma.
pub const DEPENDENT_RING: &str = r#"{
  "apps": [
    {
      "label": "ring",
      "models": [
        { "name": "Alpha", "fields": [{ "name": "link", "type": "ForeignKey", "to": "Gamma", "null": true }] },
        { "name": "Beta", "fields": [{ "name": "alpha", "type": "ForeignKey", "to": "Alpha" }] },
        { "name": "Gamma", "fields": [{ "name": "beta", "type": "ForeignKey", "to": "Beta" }] }
      ]
    }
  ]
}"#;
