//! 成员匹配与解析引擎集成测试

mod fixtures;

use container_abstractions::{InjectionMember, InjectionValue};
use container_common::{ConfigError, ConvertedValue, TypeRef};
use container_config::{
    AliasTable, ConstructorElement, InjectionMemberElement, MethodElement, ParameterElement,
    ParameterValueElement, PropertyElement, RegistrationRequest, ResolutionContext,
    collect_members,
};

fn value_param(name: &str, literal: &str) -> ParameterElement {
    ParameterElement::named(
        name,
        ParameterValueElement::Value {
            value: literal.to_string(),
            type_name: None,
        },
    )
}

fn dependency_param(name: &str, type_name: Option<&str>) -> ParameterElement {
    ParameterElement::named(
        name,
        ParameterValueElement::Dependency {
            name: None,
            type_name: type_name.map(str::to_string),
        },
    )
}

fn request(target: &str) -> RegistrationRequest {
    RegistrationRequest {
        from: TypeRef::named(target),
        to: TypeRef::named(target),
        name: None,
    }
}

macro_rules! with_ctx {
    ($ctx:ident => $body:block) => {
        fixtures::init_test_logger();
        let types = fixtures::demo_registry();
        let converters = fixtures::demo_converters();
        let aliases = AliasTable::new();
        let $ctx = ResolutionContext::new(&types, &converters, &aliases, &[]);
        $body
    };
}

#[test]
fn exact_arity_constructor_resolves_in_order() {
    with_ctx!(ctx => {
        let element = ConstructorElement {
            parameters: vec![value_param("host", "localhost"), value_param("port", "8080")],
        };
        let members = element
            .injection_members(&ctx, &request("demo::Endpoint"))
            .unwrap();

        assert_eq!(
            members,
            vec![InjectionMember::Constructor {
                parameters: vec![
                    InjectionValue::Value {
                        value_type: TypeRef::named("String"),
                        value: ConvertedValue::Text("localhost".to_string()),
                    },
                    InjectionValue::Value {
                        value_type: TypeRef::named("i32"),
                        value: ConvertedValue::Int(8080),
                    },
                ],
            }]
        );
    });
}

#[test]
fn arity_mismatch_fails_naming_type_and_parameters() {
    with_ctx!(ctx => {
        // demo::Foo 只有双参构造函数, 配置给出三个参数
        let element = ConstructorElement {
            parameters: vec![
                value_param("first", "a"),
                value_param("second", "b"),
                value_param("third", "c"),
            ],
        };
        let error = element
            .injection_members(&ctx, &request("demo::Foo"))
            .unwrap_err();

        match error {
            ConfigError::NoMatchingConstructor {
                type_name,
                parameter_names,
            } => {
                assert_eq!(type_name, "demo::Foo");
                assert_eq!(parameter_names, vec!["first", "second", "third"]);
            }
            other => panic!("意外的错误类型: {:?}", other),
        }
    });
}

#[test]
fn matching_is_positional_even_with_names() {
    with_ctx!(ctx => {
        // 名称与形式参数一致但位置颠倒: 位置匹配必须失败
        let element = ConstructorElement {
            parameters: vec![value_param("port", "8080"), value_param("host", "localhost")],
        };
        let error = element
            .injection_members(&ctx, &request("demo::Endpoint"))
            .unwrap_err();
        assert!(matches!(error, ConfigError::NoMatchingConstructor { .. }));
    });
}

#[test]
fn first_declared_overload_wins_when_both_match() {
    with_ctx!(ctx => {
        // "42" 对 String 和 i32 都可转换; demo::Widget 先声明 String 重载
        let element = ConstructorElement {
            parameters: vec![value_param("value", "42")],
        };
        let members = element
            .injection_members(&ctx, &request("demo::Widget"))
            .unwrap();

        assert_eq!(
            members,
            vec![InjectionMember::Constructor {
                parameters: vec![InjectionValue::Value {
                    value_type: TypeRef::named("String"),
                    value: ConvertedValue::Text("42".to_string()),
                }],
            }]
        );
    });
}

#[test]
fn dependency_parameters_resolve_to_deferred_references() {
    with_ctx!(ctx => {
        let element = ConstructorElement {
            parameters: vec![dependency_param("logger", Some("demo::ConsoleLogger"))],
        };
        let members = element
            .injection_members(&ctx, &request("demo::OrderService"))
            .unwrap();

        assert_eq!(
            members,
            vec![InjectionMember::Constructor {
                parameters: vec![InjectionValue::Dependency {
                    dependency_type: TypeRef::named("demo::ConsoleLogger"),
                    name: None,
                }],
            }]
        );
    });
}

#[test]
fn resolution_is_idempotent() {
    with_ctx!(ctx => {
        let element = ConstructorElement {
            parameters: vec![
                dependency_param("logger", None),
                value_param("retries", "3"),
            ],
        };
        let first = element
            .injection_members(&ctx, &request("demo::OrderService"))
            .unwrap();
        let second = element
            .injection_members(&ctx, &request("demo::OrderService"))
            .unwrap();
        assert_eq!(first, second);
    });
}

#[test]
fn method_overloads_select_first_declared_match() {
    with_ctx!(ctx => {
        let element = MethodElement {
            name: "initialize".to_string(),
            parameters: vec![value_param("retries", "5")],
        };
        let members = element
            .injection_members(&ctx, &request("demo::OrderService"))
            .unwrap();

        assert_eq!(
            members,
            vec![InjectionMember::Method {
                name: "initialize".to_string(),
                parameters: vec![InjectionValue::Value {
                    value_type: TypeRef::named("i32"),
                    value: ConvertedValue::Int(5),
                }],
            }]
        );
    });
}

#[test]
fn unknown_method_fails_with_configured_names() {
    with_ctx!(ctx => {
        let element = MethodElement {
            name: "shutdown".to_string(),
            parameters: vec![value_param("force", "true")],
        };
        let error = element
            .injection_members(&ctx, &request("demo::OrderService"))
            .unwrap_err();

        match error {
            ConfigError::NoMatchingMethod {
                type_name,
                method_name,
                parameter_names,
            } => {
                assert_eq!(type_name, "demo::OrderService");
                assert_eq!(method_name, "shutdown");
                assert_eq!(parameter_names, vec!["force"]);
            }
            other => panic!("意外的错误类型: {:?}", other),
        }
    });
}

#[test]
fn property_resolution_binds_declared_type() {
    with_ctx!(ctx => {
        let element = PropertyElement {
            name: "Timeout".to_string(),
            value: ParameterValueElement::Value {
                value: "30".to_string(),
                type_name: None,
            },
        };
        let members = element
            .injection_members(&ctx, &request("demo::OrderService"))
            .unwrap();

        assert_eq!(
            members,
            vec![InjectionMember::Property {
                name: "Timeout".to_string(),
                value: InjectionValue::Value {
                    value_type: TypeRef::named("i32"),
                    value: ConvertedValue::Int(30),
                },
            }]
        );
    });
}

#[test]
fn unknown_property_fails() {
    with_ctx!(ctx => {
        // demo::Person 只有 Name 和 Age
        let element = PropertyElement {
            name: "Address".to_string(),
            value: ParameterValueElement::default(),
        };
        let error = element
            .injection_members(&ctx, &request("demo::Person"))
            .unwrap_err();

        match error {
            ConfigError::PropertyNotFound {
                type_name,
                property_name,
            } => {
                assert_eq!(type_name, "demo::Person");
                assert_eq!(property_name, "Address");
            }
            other => panic!("意外的错误类型: {:?}", other),
        }
    });
}

#[test]
fn readonly_property_is_not_found() {
    with_ctx!(ctx => {
        let element = PropertyElement {
            name: "Version".to_string(),
            value: ParameterValueElement::default(),
        };
        let error = element
            .injection_members(&ctx, &request("demo::OrderService"))
            .unwrap_err();
        assert!(matches!(error, ConfigError::PropertyNotFound { .. }));
    });
}

#[test]
fn duplicate_member_keys_are_rejected() {
    with_ctx!(ctx => {
        let members = vec![
            InjectionMemberElement::Property(PropertyElement {
                name: "Endpoint".to_string(),
                value: ParameterValueElement::Value {
                    value: "https://a".to_string(),
                    type_name: None,
                },
            }),
            InjectionMemberElement::Property(PropertyElement {
                name: "Endpoint".to_string(),
                value: ParameterValueElement::Value {
                    value: "https://b".to_string(),
                    type_name: None,
                },
            }),
        ];
        let error = collect_members(&members, &ctx, &request("demo::OrderService")).unwrap_err();

        match error {
            ConfigError::DuplicateInjectionMember { key, type_name } => {
                assert_eq!(key, "property:Endpoint");
                assert_eq!(type_name, "demo::OrderService");
            }
            other => panic!("意外的错误类型: {:?}", other),
        }
    });
}

#[test]
fn array_parameters_resolve_each_child() {
    with_ctx!(ctx => {
        let element = ConstructorElement {
            parameters: vec![ParameterElement::named(
                "targets",
                ParameterValueElement::Array {
                    element_type_name: None,
                    items: vec![
                        ParameterValueElement::Dependency {
                            name: Some("console".to_string()),
                            type_name: Some("demo::ConsoleLogger".to_string()),
                        },
                        ParameterValueElement::Default,
                    ],
                },
            )],
        };
        let members = element
            .injection_members(&ctx, &request("demo::Broadcast"))
            .unwrap();

        assert_eq!(
            members,
            vec![InjectionMember::Constructor {
                parameters: vec![InjectionValue::Array {
                    element_type: TypeRef::named("demo::Logger"),
                    items: vec![
                        InjectionValue::Dependency {
                            dependency_type: TypeRef::named("demo::ConsoleLogger"),
                            name: Some("console".to_string()),
                        },
                        InjectionValue::Dependency {
                            dependency_type: TypeRef::named("demo::Logger"),
                            name: None,
                        },
                    ],
                }],
            }]
        );
    });
}

#[test]
fn generic_parameters_match_open_generic_registrations() {
    with_ctx!(ctx => {
        let types = ctx.types;
        let generics = types
            .get("demo::Repository")
            .unwrap()
            .generic_parameters
            .clone();
        let generic_ctx = ctx.with_generic_parameters(&generics);

        let element = ConstructorElement {
            parameters: vec![ParameterElement::named(
                "source",
                ParameterValueElement::GenericParameter {
                    name: "T".to_string(),
                },
            )],
        };
        let members = element
            .injection_members(&generic_ctx, &request("demo::Repository"))
            .unwrap();

        assert_eq!(
            members,
            vec![InjectionMember::Constructor {
                parameters: vec![InjectionValue::GenericParameter {
                    name: "T".to_string(),
                }],
            }]
        );
    });
}
