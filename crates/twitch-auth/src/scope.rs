//! Twitch authorization scopes
//!
//! A scope is one discrete permission a token can carry. The set is closed:
//! every scope Twitch documents is a `Scope` variant, and each variant maps to
//! exactly one wire string (`"user:read:chat"` and friends).
//!
//! Both directions of the mapping come from the single table passed to
//! `scope_registry!`. The forward direction is a generated `match`; the
//! reverse index is built from `Scope::ALL` on first use. A wire string that
//! is not in the table never decodes to a scope. It is an `UnknownScope`
//! error, so "unrecognized" can't be mistaken for "nothing requested".
//!
//! Full list: <https://dev.twitch.tv/docs/authentication/scopes/>

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A wire string with no matching `Scope`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scope: {0}")]
pub struct UnknownScope(pub String);

macro_rules! scope_registry {
    ($( $(#[$doc:meta])* $variant:ident => $wire:literal, )+) => {
        /// Level of access an app requests on the Twitch API.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[non_exhaustive]
        pub enum Scope {
            $( $(#[$doc])* $variant, )+
        }

        impl Scope {
            /// Every known scope, in registry order.
            pub const ALL: &'static [Scope] = &[ $( Scope::$variant, )+ ];

            /// The string Twitch uses for this scope on the wire.
            pub const fn wire_name(self) -> &'static str {
                match self {
                    $( Scope::$variant => $wire, )+
                }
            }
        }
    };
}

scope_registry! {
    /// View analytics data for the Twitch Extensions owned by the account.
    AnalyticsReadExtensions => "analytics:read:extensions",
    /// View analytics data for the games owned by the account.
    AnalyticsReadGames => "analytics:read:games",
    /// View Bits information for a channel.
    BitsRead => "bits:read",
    /// Join the user's channel as a bot user and perform chat actions.
    ChannelBot => "channel:bot",
    /// Manage the ads schedule on a channel.
    ChannelManageAds => "channel:manage:ads",
    /// Read the ads schedule and details on the user's channel.
    ChannelReadAds => "channel:read:ads",
    /// Manage a channel's broadcast configuration, stream markers and tags.
    ChannelManageBroadcast => "channel:manage:broadcast",
    /// Read charity campaign details and donations on the user's channel.
    ChannelReadCharity => "channel:read:charity",
    /// Run commercials on a channel.
    ChannelEditCommercial => "channel:edit:commercial",
    /// View the list of editors in a channel.
    ChannelReadEditors => "channel:read:editors",
    /// Manage a channel's Extension configuration, including activation.
    ChannelManageExtensions => "channel:manage:extensions",
    /// View Creator Goals for a channel.
    ChannelReadGoals => "channel:read:goals",
    /// Read Guest Star details for the user's channel.
    ChannelReadGuestStar => "channel:read:guest_star",
    /// Manage Guest Star for the user's channel.
    ChannelManageGuestStar => "channel:manage:guest_star",
    /// View Hype Train information for a channel.
    ChannelReadHypeTrain => "channel:read:hype_train",
    /// Add and remove moderators on the user's channel.
    ChannelManageModerators => "channel:manage:moderators",
    /// View a channel's polls.
    ChannelReadPolls => "channel:read:polls",
    /// Manage a channel's polls.
    ChannelManagePolls => "channel:manage:polls",
    /// View a channel's Channel Points Predictions.
    ChannelReadPredictions => "channel:read:predictions",
    /// Manage a channel's Channel Points Predictions.
    ChannelManagePredictions => "channel:manage:predictions",
    /// Raid another channel.
    ChannelManageRaids => "channel:manage:raids",
    /// View Channel Points custom rewards and their redemptions.
    ChannelReadRedemptions => "channel:read:redemptions",
    /// Manage Channel Points custom rewards and their redemptions.
    ChannelManageRedemptions => "channel:manage:redemptions",
    /// Manage a channel's stream schedule.
    ChannelManageSchedule => "channel:manage:schedule",
    /// View the user's stream key.
    ChannelReadStreamKey => "channel:read:stream_key",
    /// List a channel's subscribers and check whether a user is subscribed.
    ChannelReadSubscriptions => "channel:read:subscriptions",
    /// Manage a channel's videos, including deletion.
    ChannelManageVideos => "channel:manage:videos",
    /// View the VIPs in the user's channel.
    ChannelReadVips => "channel:read:vips",
    /// Add and remove VIPs in the user's channel.
    ChannelManageVips => "channel:manage:vips",
    /// Perform moderation actions in a channel.
    ChannelModerate => "channel:moderate",
    /// Manage Clips for a channel.
    ClipsEdit => "clips:edit",
    /// View moderators, bans, timeouts and AutoMod settings where the user moderates.
    ModerationRead => "moderation:read",
    /// Send announcements where the user moderates.
    ModeratorManageAnnouncements => "moderator:manage:announcements",
    /// Manage messages held for review by AutoMod.
    ModeratorManageAutomod => "moderator:manage:automod",
    /// View a broadcaster's AutoMod settings.
    ModeratorReadAutomodSettings => "moderator:read:automod_settings",
    /// Manage a broadcaster's AutoMod settings.
    ModeratorManageAutomodSettings => "moderator:manage:automod_settings",
    /// View bans and unbans.
    ModeratorReadBannedUsers => "moderator:read:banned_users",
    /// Ban and unban users.
    ModeratorManageBannedUsers => "moderator:manage:banned_users",
    /// View a broadcaster's blocked terms.
    ModeratorReadBlockedTerms => "moderator:read:blocked_terms",
    /// Read deleted chat messages in a channel.
    ModeratorReadChatMessages => "moderator:read:chat_messages",
    /// Manage a broadcaster's blocked terms.
    ModeratorManageBlockedTerms => "moderator:manage:blocked_terms",
    /// Delete chat messages.
    ModeratorManageChatMessages => "moderator:manage:chat_messages",
    /// View a broadcaster's chat room settings.
    ModeratorReadChatSettings => "moderator:read:chat_settings",
    /// Manage a broadcaster's chat room settings.
    ModeratorManageChatSettings => "moderator:manage:chat_settings",
    /// View the chatters in a broadcaster's chat room.
    ModeratorReadChatters => "moderator:read:chatters",
    /// View a broadcaster's followers.
    ModeratorReadFollowers => "moderator:read:followers",
    /// View Guest Star details where the user is a Guest Star moderator.
    ModeratorReadGuestStar => "moderator:read:guest_star",
    /// Manage Guest Star where the user is a Guest Star moderator.
    ModeratorManageGuestStar => "moderator:manage:guest_star",
    /// View the moderators of channels the user moderates.
    ModeratorReadModerators => "moderator:read:moderators",
    /// View a broadcaster's Shield Mode status.
    ModeratorReadShieldMode => "moderator:read:shield_mode",
    /// Manage a broadcaster's Shield Mode status.
    ModeratorManageShieldMode => "moderator:manage:shield_mode",
    /// View a broadcaster's shoutouts.
    ModeratorReadShoutouts => "moderator:read:shoutouts",
    /// Manage a broadcaster's shoutouts.
    ModeratorManageShoutouts => "moderator:manage:shoutouts",
    /// View messages from, and flags on, suspicious users.
    ModeratorReadSuspiciousUsers => "moderator:read:suspicious_users",
    /// View a broadcaster's unban requests.
    ModeratorReadUnbanRequests => "moderator:read:unban_requests",
    /// Manage a broadcaster's unban requests.
    ModeratorManageUnbanRequests => "moderator:manage:unban_requests",
    /// View the VIPs of channels the user moderates.
    ModeratorReadVips => "moderator:read:vips",
    /// View warnings in channels the user moderates.
    ModeratorReadWarnings => "moderator:read:warnings",
    /// Warn users in channels the user moderates.
    ModeratorManageWarnings => "moderator:manage:warnings",
    /// Join chat as the user, appearing as a bot.
    UserBot => "user:bot",
    /// Update the user's information.
    UserEdit => "user:edit",
    /// View and edit the user's broadcasting configuration.
    UserEditBroadcast => "user:edit:broadcast",
    /// View the user's block list.
    UserReadBlockedUsers => "user:read:blocked_users",
    /// Manage the user's block list.
    UserManageBlockedUsers => "user:manage:blocked_users",
    /// View the user's broadcasting configuration.
    UserReadBroadcast => "user:read:broadcast",
    /// Receive chat messages and notifications for a channel's chat room.
    UserReadChat => "user:read:chat",
    /// Change the color of the user's name in chat.
    UserManageChatColor => "user:manage:chat_color",
    /// View the user's email address.
    UserReadEmail => "user:read:email",
    /// View the emotes available to the user.
    UserReadEmotes => "user:read:emotes",
    /// View the channels the user follows.
    UserReadFollows => "user:read:follows",
    /// View the channels where the user is a moderator.
    UserReadModeratedChannels => "user:read:moderated_channels",
    /// View the channels the user subscribes to.
    UserReadSubscriptions => "user:read:subscriptions",
    /// Receive whispers sent to the user.
    UserReadWhispers => "user:read:whispers",
    /// Receive whispers and send whispers on the user's behalf.
    UserManageWhispers => "user:manage:whispers",
    /// Send chat messages as the user.
    UserWriteChat => "user:write:chat",
}

static BY_WIRE_NAME: LazyLock<HashMap<&'static str, Scope>> = LazyLock::new(|| {
    Scope::ALL
        .iter()
        .map(|&scope| (scope.wire_name(), scope))
        .collect()
});

/// Look up the scope for a wire string.
pub fn decode_scope(name: &str) -> Result<Scope, UnknownScope> {
    BY_WIRE_NAME
        .get(name)
        .copied()
        .ok_or_else(|| UnknownScope(name.to_owned()))
}

/// Parse a space-separated `scope` parameter. Runs of whitespace are ignored;
/// the first unknown entry fails the whole list.
pub fn decode_scopes(names: &str) -> Result<Vec<Scope>, UnknownScope> {
    names.split_whitespace().map(decode_scope).collect()
}

/// Join wire names with single spaces, preserving input order. This is the
/// exact value of the OAuth `scope` query parameter.
pub fn encode_scopes(scopes: &[Scope]) -> String {
    scopes
        .iter()
        .map(|scope| scope.wire_name())
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for Scope {
    type Err = UnknownScope;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_scope(s)
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for Scope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        decode_scope(&name).map_err(serde::de::Error::custom)
    }
}
