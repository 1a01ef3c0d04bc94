use crate::auth::permissions::Role;
use crate::db::tables::DbTable;
use crate::helpers::get_timestamp_string;
use crate::qr::model::QrCode;
use nullnet_libdatastore::{
    AdvanceFilter, BatchUpdateBody, BatchUpdateRequest, GetByFilterBody, GetByFilterRequest,
    LoginBody, LoginData, LoginParams, LoginRequest, Params,
};
use nullnet_libdatastore::{DatastoreClient, DatastoreConfig};
use nullnet_liberror::{location, Error, ErrorHandler, Location};
use serde_json::{json, Value};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct DatastoreWrapper {
    inner: DatastoreClient,
}

impl DatastoreWrapper {
    pub async fn new() -> Result<Self, Error> {
        let config = DatastoreConfig::from_env();
        let inner = DatastoreClient::new(config).await?;
        Ok(Self { inner })
    }

    pub async fn login(
        &self,
        account_id: String,
        account_secret: String,
        is_root: bool,
    ) -> Result<String, Error> {
        let request = LoginRequest {
            params: Some(LoginParams {
                is_root: if is_root {
                    String::from("root")
                } else {
                    String::new()
                },
                t: String::new(),
            }),
            body: Some(LoginBody {
                data: Some(LoginData {
                    account_id,
                    account_secret,
                }),
            }),
        };

        log::trace!("Before login");
        let response = self.inner.clone().login(request).await?;
        log::trace!("After login");

        Ok(response.token)
    }

    // SELECT id, organization_id, asset_id FROM qrs WHERE id = {qr_id} AND organization_id = {organization_id} LIMIT 1
    pub async fn get_qr(
        &self,
        token: &str,
        qr_id: &str,
        organization_id: &str,
    ) -> Result<Option<QrCode>, Error> {
        let table = DbTable::Qr.to_str();
        let request = scoped_request(
            table,
            vec!["id", "organization_id", "asset_id"],
            "id",
            qr_id,
            organization_id,
        );

        log::trace!("Before get by filter to {table}");
        let response = self.inner.clone().get_by_filter(request, token).await?;
        log::trace!("After get by filter to {table}: {}", response.count);

        if response.count == 0 {
            return Ok(None);
        }

        Self::internal_qr_parse_response_data(&response.data)
    }

    fn internal_qr_parse_response_data(data: &str) -> Result<Option<QrCode>, Error> {
        let Some(record) = first_record(data)? else {
            return Ok(None);
        };
        let qr = serde_json::from_value::<QrCode>(record).handle_err(location!())?;
        Ok(Some(qr))
    }

    // SELECT roles FROM user_organizations WHERE user_id = {account_id} AND organization_id = {organization_id} LIMIT 1
    pub async fn get_role(
        &self,
        token: &str,
        account_id: &str,
        organization_id: &str,
    ) -> Result<Option<Role>, Error> {
        let table = DbTable::UserOrganization.to_str();
        let request = scoped_request(
            table,
            vec!["roles"],
            "user_id",
            account_id,
            organization_id,
        );

        log::trace!("Before get by filter to {table}");
        let response = self.inner.clone().get_by_filter(request, token).await?;
        log::trace!("After get by filter to {table}: {}", response.count);

        if response.count == 0 {
            return Ok(None);
        }

        Self::internal_role_parse_response_data(&response.data)
    }

    /// `roles` is either a single role or an array of roles; the first known one wins.
    fn internal_role_parse_response_data(data: &str) -> Result<Option<Role>, Error> {
        let Some(record) = first_record(data)? else {
            return Ok(None);
        };

        let roles = match record.get("roles") {
            Some(Value::Array(roles)) => roles.clone(),
            Some(role @ Value::String(_)) => vec![role.clone()],
            _ => return Ok(None),
        };

        Ok(roles
            .into_iter()
            .find_map(|role| serde_json::from_value::<Role>(role).ok()))
    }

    // SELECT COUNT(*) FROM assets WHERE id = {asset_id} AND organization_id = {organization_id}
    pub async fn asset_exists(
        &self,
        token: &str,
        asset_id: &str,
        organization_id: &str,
    ) -> Result<bool, Error> {
        let table = DbTable::Asset.to_str();
        let request = scoped_request(table, vec!["id"], "id", asset_id, organization_id);

        log::trace!("Before get by filter to {table}");
        let result = self.inner.clone().get_by_filter(request, token).await?.count > 0;
        log::trace!("After get by filter to {table}: {result}");
        Ok(result)
    }

    // UPDATE qrs SET asset_id = {asset_id}
    // WHERE id = {qr_id} AND organization_id = {organization_id} AND asset_id IS NULL
    // and, when no row matched, the same with `asset_id = ''`
    pub async fn link_asset(
        &self,
        token: &str,
        qr_id: &str,
        organization_id: &str,
        asset_id: &str,
    ) -> Result<bool, Error> {
        let table = DbTable::Qr.to_str();
        let updates = json!({
            "asset_id": asset_id,
            "updated_date": get_timestamp_string(),
        })
        .to_string();

        for unlinked in [asset_is_null(table), criteria(table, "asset_id", "")] {
            let request = link_request(table, qr_id, organization_id, unlinked, updates.clone());

            log::trace!("Before batch update to {table}");
            let count = self.inner.clone().batch_update(request, token).await?.count;
            log::trace!("After batch update to {table}: {count}");

            if count > 0 {
                return Ok(true);
            }
        }

        Ok(false)
    }
}

fn criteria(entity: &str, field: &str, value: &str) -> AdvanceFilter {
    AdvanceFilter {
        r#type: String::from("criteria"),
        field: field.to_string(),
        operator: String::from("equal"),
        entity: entity.to_string(),
        values: json!([value]).to_string(),
    }
}

fn and() -> AdvanceFilter {
    AdvanceFilter {
        r#type: String::from("operator"),
        field: String::new(),
        operator: String::from("and"),
        entity: String::new(),
        values: String::new(),
    }
}

fn asset_is_null(entity: &str) -> AdvanceFilter {
    AdvanceFilter {
        r#type: String::from("criteria"),
        field: String::from("asset_id"),
        operator: String::from("is_null"),
        entity: entity.to_string(),
        values: json!([]).to_string(),
    }
}

/// `{field} = {value} AND organization_id = {organization_id}`
fn scoped_filters(
    table: &str,
    field: &str,
    value: &str,
    organization_id: &str,
) -> Vec<AdvanceFilter> {
    vec![
        criteria(table, field, value),
        and(),
        criteria(table, "organization_id", organization_id),
    ]
}

fn scoped_request(
    table: &str,
    pluck: Vec<&str>,
    field: &str,
    value: &str,
    organization_id: &str,
) -> GetByFilterRequest {
    GetByFilterRequest {
        body: Some(GetByFilterBody {
            pluck: pluck.into_iter().map(String::from).collect(),
            advance_filters: scoped_filters(table, field, value, organization_id),
            order_by: String::new(),
            limit: 1,
            offset: 0,
            order_direction: String::new(),
            joins: vec![],
            multiple_sort: vec![],
            pluck_object: HashMap::new(),
            date_format: String::new(),
            is_case_sensitive_sorting: true,
        }),
        params: Some(Params {
            id: String::new(),
            table: table.to_string(),
            r#type: String::from("root"),
        }),
    }
}

/// Update of a QR code in scope, restricted to rows matching `unlinked`.
fn link_request(
    table: &str,
    qr_id: &str,
    organization_id: &str,
    unlinked: AdvanceFilter,
    updates: String,
) -> BatchUpdateRequest {
    let mut advance_filters = scoped_filters(table, "id", qr_id, organization_id);
    advance_filters.push(and());
    advance_filters.push(unlinked);

    BatchUpdateRequest {
        params: Some(Params {
            id: String::new(),
            table: table.to_string(),
            r#type: String::from("root"),
        }),
        body: Some(BatchUpdateBody {
            advance_filters,
            updates,
        }),
    }
}

fn first_record(data: &str) -> Result<Option<Value>, Error> {
    let array_val = serde_json::from_str::<Value>(data).handle_err(location!())?;
    let array = array_val
        .as_array()
        .ok_or("Failed to parse response")
        .handle_err(location!())?;
    Ok(array.first().cloned())
}
