//! Name-keyed tool table with JSON dispatch.

use std::collections::BTreeMap;

use futures::future::BoxFuture;
use serde_json::Value;

use crate::context::ToolContext;
use crate::error::ToolError;
use crate::tool::{Tool, ToolSpec};

type Handler =
    Box<dyn Fn(Value, &ToolContext) -> BoxFuture<'static, Result<Value, ToolError>> + Send + Sync>;

struct Entry {
    spec: ToolSpec,
    handler: Handler,
}

/// The tools one plugin exposes, sorted by name.
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<&'static str, Entry>,
}

impl ToolRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Chaining form of [`ToolRegistry::register`].
    #[must_use]
    pub fn with<T: Tool>(mut self, tool: T) -> Self {
        self.register(tool);
        self
    }

    /// Add `tool`, replacing any tool registered under the same name.
    pub fn register<T: Tool>(&mut self, tool: T) {
        let handler: Handler = Box::new(
            move |args: Value, ctx: &ToolContext| -> BoxFuture<'static, Result<Value, ToolError>> {
                let args = match serde_json::from_value::<T::Args>(args) {
                    Ok(args) => args,
                    Err(e) => {
                        let err = ToolError::InvalidArgs {
                            tool: T::NAME,
                            reason: e.to_string(),
                        };
                        return Box::pin(async move { Err(err) });
                    }
                };
                let pending = tool.call(args, ctx);
                Box::pin(async move {
                    let reply = pending.await?;
                    serde_json::to_value(reply).map_err(|e| ToolError::Encode {
                        tool: T::NAME,
                        reason: e.to_string(),
                    })
                })
            },
        );

        self.tools.insert(
            T::NAME,
            Entry {
                spec: ToolSpec::of::<T>(),
                handler,
            },
        );
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tools.keys().copied().collect()
    }

    pub fn spec(&self, name: &str) -> Option<&ToolSpec> {
        self.tools.get(name).map(|entry| &entry.spec)
    }

    pub fn specs(&self) -> impl Iterator<Item = &ToolSpec> {
        self.tools.values().map(|entry| &entry.spec)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Decode `args` for the named tool, run it and encode its reply.
    ///
    /// # Errors
    ///
    /// [`ToolError::UnknownTool`], [`ToolError::InvalidArgs`], or whatever
    /// the tool itself returns.
    pub async fn dispatch(
        &self,
        name: &str,
        args: Value,
        ctx: &ToolContext,
    ) -> Result<Value, ToolError> {
        let entry = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        (entry.handler)(args, ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Deserialize, schemars::JsonSchema)]
    struct EchoArgs {
        /// Text to send back
        text: String,
    }

    #[derive(Serialize)]
    struct EchoReply {
        plugin: String,
        text: String,
    }

    struct Echo;

    impl Tool for Echo {
        type Args = EchoArgs;
        type Reply = EchoReply;
        const NAME: &'static str = "echo";
        const DESCRIPTION: &'static str = "Send the text back";

        fn call(
            &self,
            args: Self::Args,
            ctx: &ToolContext,
        ) -> BoxFuture<'static, Result<Self::Reply, ToolError>> {
            let plugin = ctx.plugin().to_string();
            Box::pin(async move {
                Ok(EchoReply {
                    plugin,
                    text: args.text,
                })
            })
        }
    }

    struct Shout;

    impl Tool for Shout {
        type Args = EchoArgs;
        type Reply = String;
        const NAME: &'static str = "shout";
        const DESCRIPTION: &'static str = "Send the text back in capitals";

        fn call(
            &self,
            args: Self::Args,
            _ctx: &ToolContext,
        ) -> BoxFuture<'static, Result<Self::Reply, ToolError>> {
            Box::pin(async move { Ok(args.text.to_uppercase()) })
        }
    }

    fn registry() -> ToolRegistry {
        ToolRegistry::new().with(Shout).with(Echo)
    }

    fn ctx() -> ToolContext {
        ToolContext::new("demo-plugin")
    }

    #[test]
    fn names_are_sorted() {
        let registry = registry();
        assert_eq!(registry.names(), vec!["echo", "shout"]);
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("echo"));
        assert!(!registry.contains("missing"));
        assert!(ToolRegistry::new().is_empty());
    }

    #[test]
    fn spec_describes_arguments() {
        let registry = registry();
        let spec = registry.spec("echo").unwrap();
        assert_eq!(spec.name, "echo");
        assert_eq!(spec.description, "Send the text back");

        let params = serde_json::to_value(&spec.parameters).unwrap();
        assert_eq!(params["properties"]["text"]["type"], "string");
        assert_eq!(params["properties"]["text"]["description"], "Text to send back");
        assert_eq!(params["required"], serde_json::json!(["text"]));

        assert_eq!(registry.specs().count(), 2);
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let mut registry = ToolRegistry::new();
        registry.register(Echo);
        registry.register(Echo);
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn dispatch_passes_context_and_encodes_reply() {
        let out = registry()
            .dispatch("echo", serde_json::json!({"text": "hi"}), &ctx())
            .await
            .unwrap();
        assert_eq!(out, serde_json::json!({"plugin": "demo-plugin", "text": "hi"}));

        let out = registry()
            .dispatch("shout", serde_json::json!({"text": "hi"}), &ctx())
            .await
            .unwrap();
        assert_eq!(out, serde_json::json!("HI"));
    }

    #[tokio::test]
    async fn unknown_tool_is_rejected() {
        let err = registry()
            .dispatch("nonexistent", serde_json::json!({}), &ctx())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(ref name) if name == "nonexistent"));
        assert_eq!(err.to_string(), "unknown tool `nonexistent`");
    }

    #[tokio::test]
    async fn bad_arguments_name_the_tool() {
        let err = registry()
            .dispatch("echo", serde_json::json!({"txt": 1}), &ctx())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArgs { tool: "echo", .. }));
        assert!(err.to_string().starts_with("invalid arguments for `echo`"));
    }
}
