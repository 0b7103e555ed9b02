/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! AWS DynamoDB backed `KvStore`. Records are stored as one item per key with the key in a string attribute.
//! Note that DynamoDB normalizes numbers (`1.50` is returned as `1.5`), callers that need exact JSON
//! round trips have to store such values as text

use std::collections::HashMap;
use async_trait::async_trait;
use aws_sdk_dynamodb::{Client, types::AttributeValue};
use aws_config::{Region,meta::region::RegionProviderChain};
use serde_json::{Map,Number,Value};

use crate::{debug, info, errors::{invalid_record,Result}, kv_store::{check_key,Item,KvStore}};

pub type DynamoDbClient = Client;

pub async fn create_dynamodb_client (region: &str) -> DynamoDbClient {
    let region_provider = RegionProviderChain::first_try( Region::new( region.to_string()));
    let aws_config = aws_config::from_env().region(region_provider).load().await;
    Client::new(&aws_config)
}

#[derive(Debug,Clone)]
pub struct DynamoDbStore {
    client: DynamoDbClient,
    table: String,
    key_attr: String,
}

impl DynamoDbStore {
    /// create a client and make sure the table exists
    pub async fn connect (region: &str, table: &str, key_attr: &str)->Result<Self> {
        let client = create_dynamodb_client(region).await;

        let output = client.describe_table().table_name(table).send().await?;
        let status = output.table().and_then(|t| t.table_status()).map(|s| s.as_str().to_string());
        info!("connected to DynamoDB table {} in {} (status {:?})", table, region, status);

        Ok( DynamoDbStore::new( client, table, key_attr) )
    }

    pub fn new (client: DynamoDbClient, table: &str, key_attr: &str)->Self {
        DynamoDbStore { client, table: table.to_string(), key_attr: key_attr.to_string() }
    }
}

#[async_trait]
impl KvStore for DynamoDbStore {
    async fn put_item (&self, key: &str, mut item: Item)->Result<()> {
        check_key(key)?;
        item.entry( self.key_attr.clone()).or_insert_with(|| Value::String(key.to_string()));

        self.client
            .put_item()
            .table_name(&self.table)
            .set_item( Some( item_to_attributes(&item)))
            .send()
            .await?;

        debug!("put item {} into table {}", key, self.table);
        Ok(())
    }

    async fn get_item (&self, key: &str)->Result<Option<Item>> {
        check_key(key)?;

        let output = self.client
            .get_item()
            .table_name(&self.table)
            .key( &self.key_attr, AttributeValue::S(key.to_string()))
            .consistent_read(true)
            .send()
            .await?;

        match output.item {
            Some(attrs) => Ok( Some( attributes_to_item(&attrs)?)),
            None => Ok(None)
        }
    }

    fn location (&self)->String { format!("dynamodb:{}", self.table) }
}

/* #region JSON <-> AttributeValue *********************************************************/

pub fn item_to_attributes (item: &Item)->HashMap<String,AttributeValue> {
    item.iter().map(|(k,v)| (k.clone(), json_to_attribute(v))).collect()
}

pub fn attributes_to_item (attrs: &HashMap<String,AttributeValue>)->Result<Item> {
    let mut item = Map::new();
    for (k,av) in attrs {
        item.insert( k.clone(), attribute_to_json(av)?);
    }
    Ok(item)
}

pub fn json_to_attribute (v: &Value)->AttributeValue {
    match v {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(a) => AttributeValue::L( a.iter().map(json_to_attribute).collect()),
        Value::Object(o) => AttributeValue::M( item_to_attributes(o)),
    }
}

pub fn attribute_to_json (av: &AttributeValue)->Result<Value> {
    let v = match av {
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::N(s) => Value::Number( parse_number(s)?),
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::L(l) => Value::Array( l.iter().map(attribute_to_json).collect::<Result<Vec<Value>>>()?),
        AttributeValue::M(m) => Value::Object( attributes_to_item(m)?),
        AttributeValue::Ss(ss) => Value::Array( ss.iter().map(|s| Value::String(s.clone())).collect()),
        AttributeValue::Ns(ns) => Value::Array( ns.iter().map(|s| parse_number(s).map(Value::Number)).collect::<Result<Vec<Value>>>()?),
        other => return Err( invalid_record( format!("unsupported attribute value {:?}", other)))
    };
    Ok(v)
}

fn parse_number (s: &str)->Result<Number> {
    s.parse::<Number>().map_err(|_| invalid_record( format!("not a number: {s}")))
}

/* #endregion JSON <-> AttributeValue */

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_attribute_conversion() {
        let v = json!({
            "job_id": "01J0000000000000000000000A",
            "count": 2,
            "ratio": 0.5,
            "done": false,
            "remote": null,
            "analyses": [ { "status": "PENDING", "urls": [] } ]
        });
        let item = v.as_object().unwrap().clone();

        let attrs = item_to_attributes(&item);
        assert_eq!( attrs.get("count"), Some(&AttributeValue::N("2".to_string())));
        assert_eq!( attrs.get("remote"), Some(&AttributeValue::Null(true)));
        assert!( matches!( attrs.get("analyses"), Some(AttributeValue::L(_))));

        let back = attributes_to_item(&attrs).unwrap();
        assert_eq!( Value::Object(back), v);
    }

    #[test]
    fn test_string_sets_become_arrays() {
        let av = AttributeValue::Ss( vec!["a".to_string(), "b".to_string()]);
        assert_eq!( attribute_to_json(&av).unwrap(), json!(["a","b"]));

        let bad = AttributeValue::N("not-a-number".to_string());
        assert!( attribute_to_json(&bad).is_err());
    }
}
