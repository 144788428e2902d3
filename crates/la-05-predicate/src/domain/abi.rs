//! # Predicate ABI
//!
//! The JSON ABI emitted by the compiler, reduced to what is needed to check
//! input data and resolve configurables: the type table, the functions and
//! the configurable offsets. Unknown fields are ignored.

use super::arguments::PredicateArgument;
use super::bytecode::ConfigurablePatch;
use super::errors::PredicateError;
use serde::{Deserialize, Serialize};

/// Name of the entry point whose inputs are checked.
const ENTRY_POINT: &str = "main";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredicateAbi {
    pub types: Vec<AbiType>,
    pub functions: Vec<AbiFunction>,
    #[serde(default)]
    pub configurables: Vec<AbiConfigurable>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiType {
    pub type_id: usize,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub components: Option<Vec<AbiTypeApplication>>,
    #[serde(default)]
    pub type_parameters: Option<Vec<usize>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiTypeApplication {
    pub name: String,
    #[serde(rename = "type")]
    pub type_id: usize,
    #[serde(default)]
    pub type_arguments: Option<Vec<AbiTypeApplication>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiFunction {
    pub name: String,
    pub inputs: Vec<AbiTypeApplication>,
    pub output: AbiTypeApplication,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiConfigurable {
    pub name: String,
    pub configurable_type: AbiTypeApplication,
    pub offset: usize,
}

/// Type shapes an argument can be checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Shape {
    Bool,
    Word,
    B256,
    B512,
    Array(Box<Shape>, usize),
}

impl Shape {
    fn accepts(&self, argument: &PredicateArgument) -> bool {
        match (self, argument) {
            (Shape::Bool, PredicateArgument::Bool(_))
            | (Shape::Word, PredicateArgument::U64(_))
            | (Shape::B256, PredicateArgument::B256(_))
            | (Shape::B512, PredicateArgument::B512(_)) => true,
            (Shape::Array(element, len), PredicateArgument::Array(items)) => {
                items.len() == *len && items.iter().all(|item| element.accepts(item))
            }
            _ => false,
        }
    }
}

impl PredicateAbi {
    /// Parse the compiler's JSON ABI.
    pub fn from_json(json: &str) -> Result<Self, PredicateError> {
        serde_json::from_str(json).map_err(|e| PredicateError::InvalidAbi(e.to_string()))
    }

    /// The `main` function.
    pub fn entry_point(&self) -> Result<&AbiFunction, PredicateError> {
        self.functions
            .iter()
            .find(|function| function.name == ENTRY_POINT)
            .ok_or_else(|| PredicateError::InvalidAbi(format!("no `{ENTRY_POINT}` function")))
    }

    /// Check `arguments` against `main`'s inputs: same count, each value of
    /// the declared shape.
    ///
    /// # Errors
    /// - `InputDataMismatch`: wrong count or wrong shape
    /// - `InvalidAbi`: the ABI has no `main` or uses an uncheckable type
    pub fn check_input_data(&self, arguments: &[PredicateArgument]) -> Result<(), PredicateError> {
        let inputs = &self.entry_point()?.inputs;
        if inputs.len() != arguments.len() {
            return Err(PredicateError::InputDataMismatch(format!(
                "`{ENTRY_POINT}` takes {} arguments, got {}",
                inputs.len(),
                arguments.len()
            )));
        }
        for (input, argument) in inputs.iter().zip(arguments) {
            self.check_argument(input, argument)?;
        }
        Ok(())
    }

    /// Encode `value` as a patch for the configurable `name`.
    ///
    /// # Errors
    /// - `InvalidAbi`: no configurable with that name
    /// - `InputDataMismatch`: `value` does not fit its declared type
    pub fn configurable_patch(
        &self,
        name: &str,
        value: &PredicateArgument,
    ) -> Result<ConfigurablePatch, PredicateError> {
        let configurable = self
            .configurables
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| PredicateError::InvalidAbi(format!("no configurable `{name}`")))?;
        self.check_argument(&configurable.configurable_type, value)?;

        let mut data = Vec::new();
        value.encode_into(&mut data);
        Ok(ConfigurablePatch::new(configurable.offset, data))
    }

    fn check_argument(
        &self,
        input: &AbiTypeApplication,
        argument: &PredicateArgument,
    ) -> Result<(), PredicateError> {
        let shape = self.shape_of(input.type_id)?;
        if !shape.accepts(argument) {
            return Err(PredicateError::InputDataMismatch(format!(
                "`{}` expects {:?}, got {}",
                input.name, shape, argument
            )));
        }
        Ok(())
    }

    fn type_by_id(&self, type_id: usize) -> Result<&AbiType, PredicateError> {
        self.types
            .iter()
            .find(|t| t.type_id == type_id)
            .ok_or_else(|| PredicateError::InvalidAbi(format!("unknown type id {type_id}")))
    }

    fn shape_of(&self, type_id: usize) -> Result<Shape, PredicateError> {
        let declared = self.type_by_id(type_id)?;
        let name = declared.type_name.as_str();
        match name {
            "bool" => return Ok(Shape::Bool),
            "u8" | "u16" | "u32" | "u64" => return Ok(Shape::Word),
            "b256" => return Ok(Shape::B256),
            "struct B512" | "struct std::b512::B512" => return Ok(Shape::B512),
            _ => {}
        }

        let len = name
            .strip_prefix("[_; ")
            .and_then(|rest| rest.strip_suffix(']'))
            .and_then(|len| len.parse::<usize>().ok())
            .ok_or_else(|| PredicateError::InvalidAbi(format!("unsupported type `{name}`")))?;
        let element = declared
            .components
            .as_ref()
            .and_then(|components| components.first())
            .ok_or_else(|| PredicateError::InvalidAbi(format!("array `{name}` has no element type")))?;
        Ok(Shape::Array(Box::new(self.shape_of(element.type_id)?), len))
    }
}
