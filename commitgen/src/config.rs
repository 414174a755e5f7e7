//! Grammar vocabulary used to recognize declarations.

/// Node kinds the attribution pass looks for.
///
/// Defaults are the Eclipse JDT kind names GumTree emits for Java. Other
/// grammars override fields with struct-update syntax:
///
/// ```
/// use commitgen::AttributionConfig;
///
/// let config = AttributionConfig {
///     type_declaration: "ClassDeclaration".into(),
///     ..Default::default()
/// };
/// assert_eq!(config.method_declaration, "MethodDeclaration");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributionConfig {
    /// Top-level type declarations; each one seeds the class context.
    pub type_declaration: String,

    /// Method declarations; entering one sets the method context.
    pub method_declaration: String,

    /// Field declarations; entering one sets the field context.
    pub field_declaration: String,

    /// The declarator inside a field declaration that holds the field's name.
    pub variable_fragment: String,

    /// Identifier nodes carrying declared names.
    pub simple_name: String,

    /// Documentation comments, skipped along with their subtrees.
    pub documentation: String,
}

impl Default for AttributionConfig {
    fn default() -> Self {
        Self {
            type_declaration: "TypeDeclaration".to_owned(),
            method_declaration: "MethodDeclaration".to_owned(),
            field_declaration: "FieldDeclaration".to_owned(),
            variable_fragment: "VariableDeclarationFragment".to_owned(),
            simple_name: "SimpleName".to_owned(),
            documentation: "Javadoc".to_owned(),
        }
    }
}
