/// How a draft value is coerced into the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// "YYYY-MM-DD", sent as is
    Date,
    /// Local "YYYY-MM-DDTHH:MM", sent as a UTC ISO-8601 timestamp
    DateTimeLocal,
    Integer,
    Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Must be non-empty on submit
    Required,
    /// Empty means absent; sent as `null`
    Optional,
    /// Always sent; empty text is sent as ""
    Free,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialValue {
    Empty,
    Literal(&'static str),
    /// Current local date and time, for `DateTimeLocal` fields
    Now,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Wire name, also the draft key
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub presence: Presence,
    pub initial: InitialValue,
    /// Discriminator field; changing it resets this field to its initial value
    pub depends_on: Option<&'static str>,
    /// Lower bound for numeric fields
    pub min: Option<f64>,
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, kind: FieldKind, presence: Presence) -> Self {
        Self {
            name,
            label,
            kind,
            presence,
            initial: InitialValue::Empty,
            depends_on: None,
            min: None,
        }
    }

    pub const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self::new(name, label, kind, Presence::Required)
    }

    pub const fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self::new(name, label, kind, Presence::Optional)
    }

    pub const fn free(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self::new(name, label, kind, Presence::Free)
    }

    pub const fn initial(mut self, initial: InitialValue) -> Self {
        self.initial = initial;
        self
    }

    pub const fn depends_on(mut self, discriminator: &'static str) -> Self {
        self.depends_on = Some(discriminator);
        self
    }

    pub const fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }
}

/// Field list and write endpoint of one entry form
#[derive(Debug)]
pub struct FormSchema {
    /// Resource path segment written to, e.g. "fuelprices"
    pub resource: &'static str,
    pub fields: &'static [FieldSpec],
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields whose options depend on `discriminator`
    pub fn dependents_of<'a>(&'a self, discriminator: &'a str) -> impl Iterator<Item = &'static FieldSpec> + 'a {
        self.fields
            .iter()
            .filter(move |f| f.depends_on == Some(discriminator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SCHEMA: FormSchema = FormSchema {
        resource: "things",
        fields: &[
            FieldSpec::required("kind", "Kind", FieldKind::Text),
            FieldSpec::required("thingID", "Thing", FieldKind::Integer).depends_on("kind"),
            FieldSpec::free("cost", "Cost", FieldKind::Decimal).initial(InitialValue::Literal("0")),
        ],
    };

    #[test]
    fn test_lookup_and_dependents() {
        assert!(SCHEMA.field("kind").unwrap().is_required());
        assert!(SCHEMA.field("nope").is_none());

        let deps: Vec<&str> = SCHEMA.dependents_of("kind").map(|f| f.name).collect();
        assert_eq!(deps, vec!["thingID"]);
        assert_eq!(SCHEMA.dependents_of("cost").count(), 0);
        assert_eq!(
            SCHEMA.field("cost").unwrap().initial,
            InitialValue::Literal("0")
        );
    }
}
