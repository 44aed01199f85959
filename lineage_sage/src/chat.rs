// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lineage_hierarchy::LineageNode;

use crate::client::GenerativeClient;
use crate::prompt::greeting;
use crate::sage::Sage;

/// Who wrote a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// The person asking.
    User,
    /// The assistant.
    Model,
}

/// One turn of a conversation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    /// Author.
    pub role: Role,
    /// Message text.
    pub text: String,
}

/// A conversation about a single node.
///
/// Opens with a greeting from the model. Each non-blank message is sent as its
/// own request, with the node context but without earlier turns.
#[derive(Clone, Debug)]
pub struct ChatSession<'n> {
    node: &'n LineageNode,
    messages: Vec<ChatMessage>,
}

impl<'n> ChatSession<'n> {
    /// Start a conversation about `node`.
    pub fn new(node: &'n LineageNode) -> Self {
        Self {
            node,
            messages: vec![ChatMessage {
                role: Role::Model,
                text: greeting(node),
            }],
        }
    }

    /// The node under discussion.
    pub fn node(&self) -> &'n LineageNode {
        self.node
    }

    /// Every message so far, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Send `input` and record the reply.
    ///
    /// Blank input is ignored and returns `None`.
    pub fn send<C: GenerativeClient>(&mut self, sage: &Sage<C>, input: &str) -> Option<&str> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage {
            role: Role::User,
            text: input.to_owned(),
        });
        let reply = sage.explain(self.node, Some(input));
        self.messages.push(ChatMessage {
            role: Role::Model,
            text: reply,
        });
        self.messages.last().map(|m| m.text.as_str())
    }
}
