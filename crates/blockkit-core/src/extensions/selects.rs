//! Setters for select menus whose choices are not added locally.
//!
//! External selects load options from the app at runtime, and the user,
//! conversation and channel selects list workspace entities, so their
//! initial selections are given directly rather than looked up by value.

use blockkit_types::composition::SelectOption;
use blockkit_types::element::{
    ChannelsSelect, ConversationsSelect, ExternalSelect, MultiChannelsSelect,
    MultiConversationsSelect, MultiExternalSelect, MultiUsersSelect, UsersSelect,
};

use crate::element::ElementBuilder;

fn collect_ids<I, S>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ids.into_iter().map(Into::into).collect()
}

impl ElementBuilder<ExternalSelect> {
    /// Characters typed before the app is queried for options.
    pub fn min_query_length(&mut self, length: u32) -> &mut Self {
        self.set(|s| s.min_query_length = Some(length))
    }

    pub fn initial_external_option(&mut self, option: SelectOption) -> &mut Self {
        self.set(|s| s.initial_option = Some(option))
    }
}

impl ElementBuilder<MultiExternalSelect> {
    pub fn min_query_length(&mut self, length: u32) -> &mut Self {
        self.set(|s| s.min_query_length = Some(length))
    }

    pub fn initial_external_options(
        &mut self,
        options: impl IntoIterator<Item = SelectOption>,
    ) -> &mut Self {
        let options: Vec<SelectOption> = options.into_iter().collect();
        self.set(|s| s.initial_options = options)
    }
}

impl ElementBuilder<UsersSelect> {
    pub fn initial_user(&mut self, user_id: impl Into<String>) -> &mut Self {
        let user_id = user_id.into();
        self.set(|s| s.initial_user = Some(user_id))
    }
}

impl ElementBuilder<MultiUsersSelect> {
    pub fn initial_users<I, S>(&mut self, user_ids: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let user_ids = collect_ids(user_ids);
        self.set(|s| s.initial_users = user_ids)
    }
}

impl ElementBuilder<ConversationsSelect> {
    pub fn initial_conversation(&mut self, conversation_id: impl Into<String>) -> &mut Self {
        let conversation_id = conversation_id.into();
        self.set(|s| s.initial_conversation = Some(conversation_id))
    }

    pub fn default_to_current_conversation(&mut self, enabled: bool) -> &mut Self {
        self.set(|s| s.default_to_current_conversation = Some(enabled))
    }

    /// Only honoured in modals containing an input block with this select.
    pub fn response_url_enabled(&mut self, enabled: bool) -> &mut Self {
        self.set(|s| s.response_url_enabled = Some(enabled))
    }
}

impl ElementBuilder<MultiConversationsSelect> {
    pub fn initial_conversations<I, S>(&mut self, conversation_ids: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let conversation_ids = collect_ids(conversation_ids);
        self.set(|s| s.initial_conversations = conversation_ids)
    }

    pub fn default_to_current_conversation(&mut self, enabled: bool) -> &mut Self {
        self.set(|s| s.default_to_current_conversation = Some(enabled))
    }
}

impl ElementBuilder<ChannelsSelect> {
    pub fn initial_channel(&mut self, channel_id: impl Into<String>) -> &mut Self {
        let channel_id = channel_id.into();
        self.set(|s| s.initial_channel = Some(channel_id))
    }

    pub fn response_url_enabled(&mut self, enabled: bool) -> &mut Self {
        self.set(|s| s.response_url_enabled = Some(enabled))
    }
}

impl ElementBuilder<MultiChannelsSelect> {
    pub fn initial_channels<I, S>(&mut self, channel_ids: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let channel_ids = collect_ids(channel_ids);
        self.set(|s| s.initial_channels = channel_ids)
    }
}
