//! Table descriptor

use std::fmt;

use super::ColumnFamilyDescriptor;

/// Schema of one table: its name and column families in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDescriptor {
    pub name: String,
    pub column_families: Vec<ColumnFamilyDescriptor>,
}

impl TableDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_families: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a family, keeping declaration order.
    pub fn add_family(&mut self, family: ColumnFamilyDescriptor) {
        self.column_families.push(family);
    }

    pub fn with_family(mut self, family: ColumnFamilyDescriptor) -> Self {
        self.add_family(family);
        self
    }

    pub fn families(&self) -> &[ColumnFamilyDescriptor] {
        &self.column_families
    }

    pub fn family(&self, name: &str) -> Option<&ColumnFamilyDescriptor> {
        self.column_families.iter().find(|cf| cf.name == name)
    }

    pub fn family_mut(&mut self, name: &str) -> Option<&mut ColumnFamilyDescriptor> {
        self.column_families.iter_mut().find(|cf| cf.name == name)
    }
}

/// Canonical one-line form used for plain text responses.
impl fmt::Display for TableDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{NAME => '{}', FAMILIES => [", self.name)?;
        for (i, family) in self.column_families.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", family)?;
        }
        f.write_str("]}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_families_keep_declaration_order() {
        let table = TableDescriptor::new("orders")
            .with_family(ColumnFamilyDescriptor::new("zeta:"))
            .with_family(ColumnFamilyDescriptor::new("alpha:"));
        let names: Vec<&str> = table.families().iter().map(|cf| cf.name()).collect();
        assert_eq!(names, vec!["zeta:", "alpha:"]);
    }

    #[test]
    fn test_family_lookup() {
        let mut table = TableDescriptor::new("orders").with_family(ColumnFamilyDescriptor::new("cf:"));
        assert!(table.family("cf:").is_some());
        assert!(table.family("cf").is_none());
        table.family_mut("cf:").unwrap().max_versions = 10;
        assert_eq!(table.family("cf:").unwrap().max_versions, 10);
    }

    #[test]
    fn test_display() {
        let table = TableDescriptor::new("orders")
            .with_family(ColumnFamilyDescriptor::new("a:"))
            .with_family(ColumnFamilyDescriptor::new("b:"));
        let text = table.to_string();
        assert!(text.starts_with("{NAME => 'orders', FAMILIES => [{NAME => 'a:'"));
        assert!(text.contains("}, {NAME => 'b:'"));
        assert!(text.ends_with("}]}"));

        assert_eq!(TableDescriptor::new("empty").to_string(), "{NAME => 'empty', FAMILIES => []}");
    }
}
