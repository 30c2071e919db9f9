use schemars::{JsonSchema, Schema, generate::SchemaSettings};
use serde::{Serialize, de::DeserializeOwned};

use crate::context::ToolContext;
use crate::error::ToolError;
use futures::future::BoxFuture;

/// A capability exposed to the model: one JSON object in, one JSON value out.
///
/// `Args` doubles as the parameter schema shown to the model, so field doc
/// comments become parameter descriptions.
pub trait Tool: Send + Sync + 'static {
    type Args: DeserializeOwned + JsonSchema + Send + 'static;
    type Reply: Serialize + Send + 'static;

    /// Name the model calls the tool by.
    const NAME: &'static str;

    /// What the model is told the tool does.
    const DESCRIPTION: &'static str;

    fn call(
        &self,
        args: Self::Args,
        ctx: &ToolContext,
    ) -> BoxFuture<'static, Result<Self::Reply, ToolError>>;
}

/// Declaration of one tool as the host advertises it.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// JSON Schema (draft 2020-12) of the arguments object
    pub parameters: Schema,
}

impl ToolSpec {
    #[must_use]
    pub fn of<T: Tool>() -> Self {
        Self {
            name: T::NAME,
            description: T::DESCRIPTION,
            parameters: SchemaSettings::draft2020_12()
                .into_generator()
                .into_root_schema_for::<T::Args>(),
        }
    }
}
