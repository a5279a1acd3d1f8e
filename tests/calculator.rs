use hexon::{
    boxed, Cache, Component, Config, Container, Element, ErrorCode, Inject, Metadata, Module, Role,
};
use std::sync::Arc;
use tracing_test::traced_test;

trait Adder: Send + Sync {
    fn add(&self, a: f64, b: f64) -> f64;
}

trait Subtractor: Send + Sync {
    fn subtract(&self, a: f64, b: f64) -> f64;
}

trait Multiplier: Send + Sync {
    fn multiply(&self, a: f64, b: f64) -> f64;
}

trait Divider: Send + Sync {
    fn divide(&self, a: f64, b: f64) -> f64;
}

struct AdderAdapter;
struct SubtractorAdapter;
struct MultiplierAdapter;
struct DividerAdapter;

impl Adder for AdderAdapter {
    fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }
}

impl Subtractor for SubtractorAdapter {
    fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }
}

impl Multiplier for MultiplierAdapter {
    fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }
}

impl Divider for DividerAdapter {
    fn divide(&self, a: f64, b: f64) -> f64 {
        a / b
    }
}

struct AdderService(Arc<Box<dyn Adder>>);
struct SubtractorService(Arc<Box<dyn Subtractor>>);
struct MultiplierService(Arc<Box<dyn Multiplier>>);
struct DividerService(Arc<Box<dyn Divider>>);

impl SubtractorService {
    fn make_subtraction(&self, a: f64, b: f64) -> f64 {
        self.0.subtract(a, b)
    }
}

type Operation = Box<dyn Fn(f64, f64) -> f64 + Send + Sync>;

/// Evaluates `"<a> <operator> <b>"`
struct CalculatorService {
    add: Operation,
    subtract: Operation,
    multiply: Operation,
    divide: Operation,
}

impl CalculatorService {
    fn calculate(&self, operation: &str) -> anyhow::Result<f64> {
        let (a, operator, b) = match operation.split(' ').collect::<Vec<_>>().as_slice() {
            [a, operator, b] => (a.parse::<f64>()?, *operator, b.parse::<f64>()?),
            _ => anyhow::bail!("Invalid operation"),
        };

        match operator {
            "+" => Ok((self.add)(a, b)),
            "-" => Ok((self.subtract)(a, b)),
            "*" => Ok((self.multiply)(a, b)),
            "/" => Ok((self.divide)(a, b)),
            _ => anyhow::bail!("Invalid operator"),
        }
    }
}

struct CalculatorServiceFromServices(CalculatorService);

fn port(token: &str, name: &str, operation: &str) -> Element {
    Element::port(token, Metadata::new(name, format!("{name} port that defines the {operation} method")), [operation])
}

fn adder_port() -> Element {
    port("AdderPort", "adder", "add")
}

fn subtractor_port() -> Element {
    port("SubtractorPort", "subtractor", "subtract")
}

fn multiplier_port() -> Element {
    port("MultiplierPort", "multiplier", "multiply")
}

fn divider_port() -> Element {
    port("DividerPort", "divider", "divide")
}

fn adapters() -> [Component; 4] {
    [
        Component::adapter(&adder_port(), ["add"], || Ok(boxed!(AdderAdapter; Adder))).unwrap(),
        Component::adapter(&subtractor_port(), ["subtract"], || Ok(boxed!(SubtractorAdapter; Subtractor))).unwrap(),
        Component::adapter(&multiplier_port(), ["multiply"], || Ok(boxed!(MultiplierAdapter; Multiplier))).unwrap(),
        Component::adapter(&divider_port(), ["divide"], || Ok(boxed!(DividerAdapter; Divider))).unwrap(),
    ]
}

fn service_metadata(name: &str) -> Metadata {
    Metadata::new(name, format!("{name} that uses its port")).with_version("0.1.0")
}

fn container_metadata(name: &str) -> Metadata {
    Metadata::new(name, format!("{name} to calculate operations")).with_version("0.1.0")
}

fn subtractor_module() -> Module {
    let [_, subtractor, _, _] = adapters();
    Module::builder("SubtractorContainer")
        .metadata(container_metadata("SubtractorContainer"))
        .config(Config::new().provide(subtractor).export(Component::service(
            "SubtractorService",
            service_metadata("SubtractorService"),
            |Inject(subtractor): Inject<Box<dyn Subtractor>>| Ok(SubtractorService(subtractor)),
        )))
        .build()
        .unwrap()
}

fn adder_module() -> Module {
    let [adder, _, _, _] = adapters();
    Module::builder("AdderContainer")
        .metadata(container_metadata("AdderContainer"))
        .config(Config::new().provide(adder).export(Component::service(
            "AdderService",
            service_metadata("AdderService"),
            |Inject(adder): Inject<Box<dyn Adder>>| Ok(AdderService(adder)),
        )))
        .build()
        .unwrap()
}

fn multiplier_module() -> Module {
    let [_, _, multiplier, _] = adapters();
    Module::builder("MultiplierContainer")
        .metadata(container_metadata("MultiplierContainer"))
        .config(Config::new().provide(multiplier).export(Component::service(
            "MultiplierService",
            service_metadata("MultiplierService"),
            |Inject(multiplier): Inject<Box<dyn Multiplier>>| Ok(MultiplierService(multiplier)),
        )))
        .build()
        .unwrap()
}

fn divider_module() -> Module {
    let [_, _, _, divider] = adapters();
    Module::builder("DividerContainer")
        .metadata(container_metadata("DividerContainer"))
        .config(Config::new().provide(divider).export(Component::service(
            "DividerService",
            service_metadata("DividerService"),
            |Inject(divider): Inject<Box<dyn Divider>>| Ok(DividerService(divider)),
        )))
        .build()
        .unwrap()
}

fn calculator_with_multiple_providers_module() -> Module {
    Module::builder("CalculatorContainer")
        .metadata(container_metadata("CalculatorContainer"))
        .config(Config::new().providers(adapters()).export(Component::service(
            "CalculatorService",
            service_metadata("CalculatorService"),
            |Inject(adder): Inject<Box<dyn Adder>>,
             Inject(subtractor): Inject<Box<dyn Subtractor>>,
             Inject(multiplier): Inject<Box<dyn Multiplier>>,
             Inject(divider): Inject<Box<dyn Divider>>| {
                Ok(CalculatorService {
                    add: Box::new(move |a, b| adder.add(a, b)),
                    subtract: Box::new(move |a, b| subtractor.subtract(a, b)),
                    multiply: Box::new(move |a, b| multiplier.multiply(a, b)),
                    divide: Box::new(move |a, b| divider.divide(a, b)),
                })
            },
        )))
        .build()
        .unwrap()
}

fn calculator_with_imports_module() -> Module {
    Module::builder("CalculatorWithImportsContainer")
        .metadata(container_metadata("CalculatorWithImportsContainer"))
        .config(
            Config::new()
                .imports([adder_module(), subtractor_module(), multiplier_module(), divider_module()])
                .export(Component::service(
                    "CalculatorService",
                    service_metadata("CalculatorService"),
                    |Inject(adder): Inject<AdderService>,
                     Inject(subtractor): Inject<SubtractorService>,
                     Inject(multiplier): Inject<MultiplierService>,
                     Inject(divider): Inject<DividerService>| {
                        Ok(CalculatorServiceFromServices(CalculatorService {
                            add: Box::new(move |a, b| adder.0.add(a, b)),
                            subtract: Box::new(move |a, b| subtractor.0.subtract(a, b)),
                            multiply: Box::new(move |a, b| multiplier.0.multiply(a, b)),
                            divide: Box::new(move |a, b| divider.0.divide(a, b)),
                        }))
                    },
                )),
        )
        .build()
        .unwrap()
}

fn assert_calculates(calculator: &CalculatorService) {
    assert_eq!(calculator.calculate("5 + 3").unwrap(), 8.0);
    assert_eq!(calculator.calculate("5 - 3").unwrap(), 2.0);
    assert_eq!(calculator.calculate("5 * 3").unwrap(), 15.0);
    assert_eq!(calculator.calculate("6 / 3").unwrap(), 2.0);
    assert!(calculator.calculate("6 /").is_err());
    assert!(calculator.calculate("6 % 3").is_err());
}

#[test]
#[traced_test]
fn test_basic_container() {
    let cache = Cache::new();
    let subtractor = Container::new_in(&cache, &subtractor_module()).unwrap();

    assert_eq!(subtractor.resolutions().len(), 2);
    assert_eq!(subtractor.providers().len(), 1);
    assert_eq!(subtractor.exports().len(), 1);

    assert_eq!(subtractor.get::<Box<dyn Subtractor>>().unwrap().subtract(5.0, 3.0), 2.0);
    assert_eq!(subtractor.get::<SubtractorService>().unwrap().make_subtraction(5.0, 3.0), 2.0);
}

#[test]
#[traced_test]
fn test_multiple_providers_container() {
    let cache = Cache::new();
    let calculator = Container::new_in(&cache, &calculator_with_multiple_providers_module()).unwrap();

    assert_eq!(calculator.resolutions().len(), 5);
    assert_eq!(calculator.providers().len(), 4);
    assert_eq!(calculator.exports().len(), 1);

    assert_calculates(&calculator.get::<CalculatorService>().unwrap());
    assert_eq!(
        calculator.resolution("CalculatorService").unwrap().dependencies(),
        [
            "<Box<dyn Adder>, AdderPort>",
            "<Box<dyn Subtractor>, SubtractorPort>",
            "<Box<dyn Multiplier>, MultiplierPort>",
            "<Box<dyn Divider>, DividerPort>",
        ]
    );
}

#[test]
#[traced_test]
fn test_composed_containers() {
    let cache = Cache::new();
    let calculator = Container::new_in(&cache, &calculator_with_imports_module()).unwrap();

    assert_eq!(calculator.resolutions().len(), 5);
    assert_eq!(calculator.providers().len(), 4);
    assert_eq!(calculator.exports().len(), 1);

    assert_calculates(&calculator.get::<CalculatorServiceFromServices>().unwrap().0);

    let adder_service = calculator.resolution("AdderService").unwrap();
    assert_eq!(adder_service.role(), Role::Provider);
    assert_eq!(adder_service.origin(), Some("AdderContainer"));
    assert!(adder_service.from_cache());

    assert_eq!(
        cache.tokens(),
        [
            "AdderContainer",
            "CalculatorWithImportsContainer",
            "DividerContainer",
            "MultiplierContainer",
            "SubtractorContainer",
        ]
    );
}

#[test]
#[traced_test]
fn test_global_cache() {
    let cache = Cache::global();
    cache.clear();

    Container::new(&subtractor_module()).unwrap();
    Container::new(&calculator_with_multiple_providers_module()).unwrap();
    let calculator = Container::new(&calculator_with_imports_module()).unwrap();
    assert_eq!(cache.len(), 6);

    let cached = cache.try_get(calculator_with_imports_module().element()).unwrap();
    assert!(std::ptr::eq(cached.resolutions(), calculator.resolutions()));
    assert_eq!(cached.resolutions().len(), 5);
    assert_eq!(cached.providers().len(), 4);
    assert_eq!(cached.exports().len(), 1);

    let adapter = Element::adapter(&subtractor_port(), ["subtract"]).unwrap();
    assert_eq!(cache.try_get(&adapter).unwrap_err().code(), ErrorCode::InvalidElement);
    assert_eq!(cache.get(&adapter).unwrap_err().code(), ErrorCode::InvalidElement);

    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(
        cache.try_get(calculator_with_imports_module().element()).unwrap_err().code(),
        ErrorCode::NotFound
    );
}
