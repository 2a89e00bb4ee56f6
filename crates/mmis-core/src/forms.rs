//! Edit Forms
//!
//! Text-backed form state for inventory items and fixtures, and the
//! conversion into backend payloads.

use crate::models::{Fixture, FixtureUpdate, InventoryItem, InventoryUpdate, NewFixture, NewInventoryItem};
use crate::validation::{non_blank, parse_whole, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Name,
    Project,
    PartNumber,
    Description,
    TestArea,
    Unit,
    CurrentQuantity,
    UnitPrice,
    MinCount,
    Manufacturer,
    ItemType,
    LifeCycle,
    ImageUrl,
    QuantityToAdd,
    Remarks,
}

impl ItemField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Item Name",
            Self::Project => "Project Name",
            Self::PartNumber => "Part Number",
            Self::Description => "Description",
            Self::TestArea => "Test Area",
            Self::Unit => "Unit",
            Self::CurrentQuantity => "Current Quantity",
            Self::UnitPrice => "Unit Price",
            Self::MinCount => "Minimum Count",
            Self::Manufacturer => "Manufacturer",
            Self::ItemType => "Type",
            Self::LifeCycle => "Life Cycle",
            Self::ImageUrl => "Image URL",
            Self::QuantityToAdd => "Quantity to Add",
            Self::Remarks => "Remarks",
        }
    }
}

/// Inventory item form, one string per input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub item_name: String,
    pub project_name: String,
    pub item_part_number: String,
    pub item_description: String,
    pub test_area: String,
    pub item_unit: String,
    pub item_current_quantity: String,
    pub item_unit_price: String,
    pub item_min_count: String,
    pub item_manufacturer: String,
    pub item_type: String,
    pub item_life_cycle: String,
    pub item_image_url: String,
    pub quantity_to_add: String,
    pub remarks: String,
}

impl ItemForm {
    pub fn for_project(project: Option<&str>) -> Self {
        Self {
            project_name: project.unwrap_or_default().to_string(),
            ..Default::default()
        }
    }

    pub fn from_item(item: &InventoryItem) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let number = |value: i32| if value == 0 { String::new() } else { value.to_string() };
        Self {
            item_name: item.item_name.clone(),
            project_name: text(&item.project_name),
            item_part_number: text(&item.item_part_number),
            item_description: text(&item.item_description),
            test_area: text(&item.test_area),
            item_unit: text(&item.item_unit),
            item_current_quantity: number(item.item_current_quantity),
            item_unit_price: text(&item.item_unit_price),
            item_min_count: number(item.item_min_count),
            item_manufacturer: text(&item.item_manufacturer),
            item_type: text(&item.item_type),
            item_life_cycle: item.item_life_cycle.map(number).unwrap_or_default(),
            item_image_url: text(&item.item_image_url),
            quantity_to_add: String::new(),
            remarks: String::new(),
        }
    }

    pub fn get(&self, field: ItemField) -> &str {
        match field {
            ItemField::Name => &self.item_name,
            ItemField::Project => &self.project_name,
            ItemField::PartNumber => &self.item_part_number,
            ItemField::Description => &self.item_description,
            ItemField::TestArea => &self.test_area,
            ItemField::Unit => &self.item_unit,
            ItemField::CurrentQuantity => &self.item_current_quantity,
            ItemField::UnitPrice => &self.item_unit_price,
            ItemField::MinCount => &self.item_min_count,
            ItemField::Manufacturer => &self.item_manufacturer,
            ItemField::ItemType => &self.item_type,
            ItemField::LifeCycle => &self.item_life_cycle,
            ItemField::ImageUrl => &self.item_image_url,
            ItemField::QuantityToAdd => &self.quantity_to_add,
            ItemField::Remarks => &self.remarks,
        }
    }

    pub fn set(&mut self, field: ItemField, value: String) {
        let slot = match field {
            ItemField::Name => &mut self.item_name,
            ItemField::Project => &mut self.project_name,
            ItemField::PartNumber => &mut self.item_part_number,
            ItemField::Description => &mut self.item_description,
            ItemField::TestArea => &mut self.test_area,
            ItemField::Unit => &mut self.item_unit,
            ItemField::CurrentQuantity => &mut self.item_current_quantity,
            ItemField::UnitPrice => &mut self.item_unit_price,
            ItemField::MinCount => &mut self.item_min_count,
            ItemField::Manufacturer => &mut self.item_manufacturer,
            ItemField::ItemType => &mut self.item_type,
            ItemField::LifeCycle => &mut self.item_life_cycle,
            ItemField::ImageUrl => &mut self.item_image_url,
            ItemField::QuantityToAdd => &mut self.quantity_to_add,
            ItemField::Remarks => &mut self.remarks,
        };
        *slot = value;
    }

    /// Payload for `POST /inventory/`. An uploaded image URL wins over the typed one.
    pub fn to_new_item(
        &self,
        employee_id: Option<u32>,
        uploaded_image: Option<String>,
    ) -> Result<NewInventoryItem, ValidationError> {
        if self.item_name.trim().is_empty() || self.item_current_quantity.trim().is_empty() {
            return Err(ValidationError::MissingStockFields);
        }
        let current = parse_whole(&self.item_current_quantity)
            .ok_or(ValidationError::NotANumber("Current Quantity"))?;

        Ok(NewInventoryItem {
            item_name: self.item_name.trim().to_string(),
            project_name: non_blank(&self.project_name),
            item_part_number: non_blank(&self.item_part_number),
            item_description: non_blank(&self.item_description),
            test_area: non_blank(&self.test_area),
            item_unit: non_blank(&self.item_unit),
            item_current_quantity: current,
            item_unit_price: non_blank(&self.item_unit_price),
            item_min_count: parse_whole(&self.item_min_count).unwrap_or(0),
            item_manufacturer: non_blank(&self.item_manufacturer),
            item_type: non_blank(&self.item_type),
            item_life_cycle: parse_whole(&self.item_life_cycle).filter(|v| *v != 0),
            item_image_url: uploaded_image.or_else(|| non_blank(&self.item_image_url)),
            employee_id,
        })
    }

    /// Payload for `PUT /inventory/{id}`
    pub fn to_update(&self) -> Result<InventoryUpdate, ValidationError> {
        if self.item_name.trim().is_empty() {
            return Err(ValidationError::MissingField("Item Name"));
        }
        Ok(InventoryUpdate {
            item_name: self.item_name.trim().to_string(),
            item_part_number: non_blank(&self.item_part_number),
            item_description: non_blank(&self.item_description),
            test_area: non_blank(&self.test_area),
            project_name: non_blank(&self.project_name),
            item_unit: non_blank(&self.item_unit),
            item_min_count: parse_whole(&self.item_min_count).unwrap_or(0),
            item_manufacturer: non_blank(&self.item_manufacturer),
            item_type: non_blank(&self.item_type),
            item_life_cycle: parse_whole(&self.item_life_cycle).unwrap_or(0),
            item_unit_price: non_blank(&self.item_unit_price),
            item_image_url: non_blank(&self.item_image_url),
            item_current_quantity: parse_whole(&self.item_current_quantity).unwrap_or(0),
        })
    }
}

/// Fixture form used by both the create and edit screens
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixtureForm {
    pub fixture_name: String,
    pub project_name: String,
    pub test_area: String,
    pub asset_tag: String,
    pub fixture_serial_number: String,
}

impl FixtureForm {
    pub fn from_fixture(fixture: &Fixture) -> Self {
        Self {
            fixture_name: fixture.fixture_name.clone(),
            project_name: fixture.project_name.clone(),
            test_area: fixture.test_area.clone(),
            asset_tag: fixture.asset_tag.clone().unwrap_or_default(),
            fixture_serial_number: fixture.fixture_serial_number.clone().unwrap_or_default(),
        }
    }

    pub fn to_new_fixture(&self, employee_id: Option<u32>) -> Result<NewFixture, ValidationError> {
        let fixture_name = require(&self.fixture_name, ValidationError::MissingRequired("Fixture Name"))?;
        let project_name = require(&self.project_name, ValidationError::MissingRequired("Project Name"))?;
        let test_area = require(&self.test_area, ValidationError::MissingRequired("Test Area"))?;
        Ok(NewFixture {
            fixture_name,
            project_name,
            test_area,
            employee_id,
        })
    }

    pub fn to_update(&self) -> Result<FixtureUpdate, ValidationError> {
        Ok(FixtureUpdate {
            fixture_name: require(&self.fixture_name, ValidationError::MissingField("Fixture Name"))?,
            project_name: require(&self.project_name, ValidationError::MissingField("Project Name"))?,
            test_area: require(&self.test_area, ValidationError::MissingField("Test Area"))?,
            asset_tag: require(&self.asset_tag, ValidationError::MissingField("Asset Tag"))?,
            fixture_serial_number: require(
                &self.fixture_serial_number,
                ValidationError::MissingField("Fixture Serial Number"),
            )?,
        })
    }
}

fn require(value: &str, missing: ValidationError) -> Result<String, ValidationError> {
    non_blank(value).ok_or(missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item() -> InventoryItem {
        InventoryItem {
            item_id: 9,
            item_name: "Pogo Pin".into(),
            item_description: None,
            item_part_number: Some("PP-100".into()),
            item_current_quantity: 40,
            item_min_count: 0,
            item_unit: Some("pcs".into()),
            item_unit_price: Some("$0.80".into()),
            item_manufacturer: None,
            item_type: Some("part".into()),
            test_area: Some("ICT_Mobo".into()),
            project_name: Some("Athena".into()),
            item_life_cycle: Some(0),
            item_image_url: None,
            created_at: None,
        }
    }

    #[test]
    fn test_new_item_requires_name_and_quantity() {
        let mut form = ItemForm::for_project(Some("Turin"));
        assert_eq!(form.to_new_item(None, None), Err(ValidationError::MissingStockFields));

        form.set(ItemField::Name, "Probe".into());
        form.set(ItemField::CurrentQuantity, "ten".into());
        assert_eq!(
            form.to_new_item(None, None),
            Err(ValidationError::NotANumber("Current Quantity"))
        );

        form.set(ItemField::CurrentQuantity, "10".into());
        form.set(ItemField::ImageUrl, "/static/typed.png".into());
        let payload = form.to_new_item(Some(4), Some("/static/uploaded.png".into())).unwrap();
        assert_eq!(payload.project_name.as_deref(), Some("Turin"));
        assert_eq!(payload.item_current_quantity, 10);
        assert_eq!(payload.item_min_count, 0);
        assert_eq!(payload.item_life_cycle, None);
        assert_eq!(payload.item_image_url.as_deref(), Some("/static/uploaded.png"));
        assert_eq!(payload.item_description, None);
    }

    #[test]
    fn test_item_form_round_trips_existing_item() {
        let form = ItemForm::from_item(&make_item());
        assert_eq!(form.get(ItemField::MinCount), "");
        assert_eq!(form.get(ItemField::LifeCycle), "");
        let update = form.to_update().unwrap();
        assert_eq!(update.item_part_number.as_deref(), Some("PP-100"));
        assert_eq!(update.item_current_quantity, 40);
        assert_eq!(update.item_life_cycle, 0);
    }

    #[test]
    fn test_new_fixture_reports_first_missing_field() {
        let mut form = FixtureForm::default();
        let err = form.to_new_fixture(None).unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all required fields. Fixture Name is required.");

        form.fixture_name = "FX-1".into();
        form.project_name = "Gulp".into();
        assert_eq!(
            form.to_new_fixture(None),
            Err(ValidationError::MissingRequired("Test Area"))
        );
    }

    #[test]
    fn test_fixture_update_requires_all_fields() {
        let form = FixtureForm {
            fixture_name: "FX-1".into(),
            project_name: "Gulp".into(),
            test_area: "TOOLS".into(),
            asset_tag: "A-1".into(),
            fixture_serial_number: " ".into(),
        };
        assert_eq!(
            form.to_update().unwrap_err().to_string(),
            "Please fill in Fixture Serial Number"
        );
    }
}
