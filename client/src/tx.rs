//! A small, inspectable model of the programmable transaction this client
//! submits: a list of inputs and a list of commands whose arguments refer to
//! inputs, the gas coin, or earlier command results. The sign-and-execute
//! capability is responsible for encoding and signing it.

use serde::Serialize;

/// Well-known shared clock object available to every transaction.
pub const CLOCK_OBJECT_ID: &str = "0x6";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallTarget {
    pub package: String,
    pub module: String,
    pub function: String,
}

impl std::fmt::Display for CallTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}::{}", self.package, self.module, self.function)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PureValue {
    Address(String),
    String(String),
    U64(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Input {
    Pure(PureValue),
    /// Object reference, resolved to the current version by the executor.
    Object(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Argument {
    /// The caller's gas/fee-bearing coin.
    GasCoin,
    /// Index into the transaction's input list.
    Input(u16),
    /// Result of an earlier command.
    Result(u16),
    NestedResult(u16, u16),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Command {
    SplitCoins {
        coin: Argument,
        amounts: Vec<Argument>,
    },
    MoveCall {
        target: CallTarget,
        arguments: Vec<Argument>,
    },
}

/// A fully built transaction, ready to hand to a signer. Commands execute in
/// order within one atomic submission unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub inputs: Vec<Input>,
    pub commands: Vec<Command>,
}

impl Transaction {
    /// Resolve an `Argument::Input` back to its value, for inspection.
    pub fn input(&self, argument: Argument) -> Option<&Input> {
        match argument {
            Argument::Input(ix) => self.inputs.get(ix as usize),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct TransactionBuilder {
    inputs: Vec<Input>,
    commands: Vec<Command>,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn input(&mut self, input: Input) -> Argument {
        let ix = self.inputs.len() as u16;
        self.inputs.push(input);
        Argument::Input(ix)
    }

    pub fn pure_address(&mut self, address: impl Into<String>) -> Argument {
        self.input(Input::Pure(PureValue::Address(address.into())))
    }

    pub fn pure_string(&mut self, value: impl Into<String>) -> Argument {
        self.input(Input::Pure(PureValue::String(value.into())))
    }

    pub fn pure_u64(&mut self, value: u64) -> Argument {
        self.input(Input::Pure(PureValue::U64(value)))
    }

    pub fn object(&mut self, id: impl Into<String>) -> Argument {
        self.input(Input::Object(id.into()))
    }

    /// Carve new coins of the given amounts out of `coin`. Returns the
    /// command's result argument, usable as a coin handle by later commands.
    pub fn split_coins(&mut self, coin: Argument, amounts: Vec<Argument>) -> Argument {
        let ix = self.commands.len() as u16;
        self.commands.push(Command::SplitCoins { coin, amounts });
        Argument::Result(ix)
    }

    pub fn move_call(&mut self, target: CallTarget, arguments: Vec<Argument>) -> Argument {
        let ix = self.commands.len() as u16;
        self.commands.push(Command::MoveCall { target, arguments });
        Argument::Result(ix)
    }

    pub fn finish(self) -> Transaction {
        Transaction {
            inputs: self.inputs,
            commands: self.commands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_are_indexed_in_insertion_order() {
        let mut builder = TransactionBuilder::new();
        let a = builder.pure_u64(7);
        let b = builder.pure_string("x");
        assert_eq!(a, Argument::Input(0));
        assert_eq!(b, Argument::Input(1));

        let tx = builder.finish();
        assert_eq!(tx.input(a), Some(&Input::Pure(PureValue::U64(7))));
        assert_eq!(tx.input(b), Some(&Input::Pure(PureValue::String("x".into()))));
    }

    #[test]
    fn split_result_points_at_its_command() {
        let mut builder = TransactionBuilder::new();
        let amount = builder.pure_u64(100);
        let payment = builder.split_coins(Argument::GasCoin, vec![amount]);
        assert_eq!(payment, Argument::Result(0));

        let call = builder.move_call(
            CallTarget {
                package: "0x1".into(),
                module: "m".into(),
                function: "f".into(),
            },
            vec![payment],
        );
        assert_eq!(call, Argument::Result(1));
    }

    #[test]
    fn gas_coin_is_not_an_input() {
        let tx = TransactionBuilder::new().finish();
        assert_eq!(tx.input(Argument::GasCoin), None);
        assert_eq!(tx.input(Argument::Result(0)), None);
    }

    #[test]
    fn call_target_displays_fully_qualified() {
        let target = CallTarget {
            package: "0xwework".into(),
            module: "job_market".into(),
            function: "create_job".into(),
        };
        assert_eq!(target.to_string(), "0xwework::job_market::create_job");
    }
}
