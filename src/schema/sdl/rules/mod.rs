mod known_argument_names_on_directives;
mod known_directives;
mod known_type_names;
mod lone_schema_definition;
mod possible_type_extensions;
mod provided_required_arguments_on_directives;
mod unique_argument_definition_names;
mod unique_argument_names;
mod unique_directive_names;
mod unique_directives_per_location;
mod unique_enum_value_names;
mod unique_field_definition_names;
mod unique_input_field_names;
mod unique_operation_types;
mod unique_type_names;

pub use known_argument_names_on_directives::*;
pub use known_directives::*;
pub use known_type_names::*;
pub use lone_schema_definition::*;
pub use possible_type_extensions::*;
pub use provided_required_arguments_on_directives::*;
pub use unique_argument_definition_names::*;
pub use unique_argument_names::*;
pub use unique_directive_names::*;
pub use unique_directives_per_location::*;
pub use unique_enum_value_names::*;
pub use unique_field_definition_names::*;
pub use unique_input_field_names::*;
pub use unique_operation_types::*;
pub use unique_type_names::*;
