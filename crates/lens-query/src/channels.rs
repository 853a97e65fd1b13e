use serde::Serialize;

use lens_store::LedgerStore;
use lens_types::{
    AccountId, Drops, LedgerHash, ObjectKey, PayChannel, TokenKind, encode_token,
};

use crate::error::{QueryError, QueryResult};
use crate::params::ChannelsParams;
use crate::scan::{Verdict, scan_owned};

/// One payment channel in an `account_channels` response.
#[derive(Clone, Debug, Serialize)]
pub struct ChannelRecord {
    pub channel_id: ObjectKey,
    pub account: AccountId,
    pub destination_account: AccountId,
    pub amount: Drops,
    pub balance: Drops,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key_hex: Option<String>,
    pub settle_delay: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_after: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_tag: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_tag: Option<u32>,
}

impl ChannelRecord {
    fn project(key: &ObjectKey, channel: &PayChannel) -> Self {
        let (public_key, public_key_hex) = match &channel.public_key {
            Some(pk) => (
                Some(encode_token(TokenKind::AccountPublic, pk)),
                Some(hex::encode_upper(pk)),
            ),
            None => (None, None),
        };
        Self {
            channel_id: *key,
            account: channel.source,
            destination_account: channel.destination,
            amount: channel.amount,
            balance: channel.balance,
            public_key,
            public_key_hex,
            settle_delay: channel.settle_delay,
            expiration: channel.expiration,
            cancel_after: channel.cancel_after,
            source_tag: channel.source_tag,
            destination_tag: channel.destination_tag,
        }
    }
}

/// `account_channels` response.
#[derive(Clone, Debug, Serialize)]
pub struct ChannelsResponse {
    pub ledger_index: u32,
    pub ledger_hash: LedgerHash,
    pub account: AccountId,
    pub channels: Vec<ChannelRecord>,
    /// Present iff more matching channels remain past this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<ObjectKey>,
}

/// List an account's payment channels, optionally filtered by destination.
///
/// `limit` counts channels returned: the scan stops on the `limit + 1`-th
/// match without consuming it, and that channel's key comes back as the
/// `marker` for the next page. Non-matching owned objects never count
/// against the limit.
pub async fn account_channels(
    store: &dyn LedgerStore,
    params: &ChannelsParams,
) -> QueryResult<ChannelsResponse> {
    let query = params.validate()?;
    let header = store
        .resolve(&query.selector)
        .await?
        .ok_or(QueryError::LedgerNotFound)?;

    let mut channels = Vec::new();
    let mut remaining = query.limit;
    let marker = scan_owned(
        store,
        &query.account,
        header.sequence,
        query.marker,
        |key, object| {
            let Some(channel) = object.as_pay_channel() else {
                return Verdict::Continue;
            };
            if channel.source != query.account {
                return Verdict::Continue;
            }
            if let Some(destination) = &query.destination {
                if channel.destination != *destination {
                    return Verdict::Continue;
                }
            }
            if remaining == 0 {
                return Verdict::Stop;
            }
            remaining -= 1;
            channels.push(ChannelRecord::project(key, channel));
            Verdict::Continue
        },
    )
    .await?;

    tracing::debug!(
        account = %query.account,
        returned = channels.len(),
        more = marker.is_some(),
        "account_channels"
    );
    Ok(ChannelsResponse {
        ledger_index: header.sequence,
        ledger_hash: header.hash,
        account: query.account,
        channels,
        marker,
    })
}
