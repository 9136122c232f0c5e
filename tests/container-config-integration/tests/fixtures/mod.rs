//! 集成测试共享夹具

use container_common::{ParamDescriptor, TypeDescriptor, TypeRef, TypeRegistry, ValueConverterRegistry};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// 初始化测试日志系统（只初始化一次）
pub fn init_test_logger() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .try_init()
            .ok();
    });
}

/// 构建演示域的类型注册表
///
/// 成员按此处的调用顺序声明, 匹配测试依赖该顺序
pub fn demo_registry() -> TypeRegistry {
    let registry = TypeRegistry::new();

    registry.register(TypeDescriptor::new("demo::Logger"));

    registry.register(
        TypeDescriptor::new("demo::ConsoleLogger")
            .with_assignable_to("demo::Logger")
            .with_constructor(vec![ParamDescriptor::new("level", TypeRef::named("String"))])
            .with_constructor(vec![
                ParamDescriptor::new("level", TypeRef::named("String")),
                ParamDescriptor::new("colored", TypeRef::named("bool")),
            ]),
    );

    registry.register(
        TypeDescriptor::new("demo::OrderService")
            .with_constructor(vec![ParamDescriptor::new(
                "logger",
                TypeRef::named("demo::Logger"),
            )])
            .with_constructor(vec![
                ParamDescriptor::new("logger", TypeRef::named("demo::Logger")),
                ParamDescriptor::new("retries", TypeRef::named("i32")),
            ])
            .with_method(
                "initialize",
                vec![ParamDescriptor::new("retries", TypeRef::named("i32"))],
            )
            .with_method(
                "initialize",
                vec![
                    ParamDescriptor::new("retries", TypeRef::named("i32")),
                    ParamDescriptor::new("label", TypeRef::named("String")),
                ],
            )
            .with_property("Endpoint", TypeRef::named("String"))
            .with_property("Timeout", TypeRef::named("i32"))
            .with_readonly_property("Version", TypeRef::named("String")),
    );

    registry.register(
        TypeDescriptor::new("demo::Person")
            .with_constructor(vec![])
            .with_property("Name", TypeRef::named("String"))
            .with_property("Age", TypeRef::named("i32")),
    );

    registry.register(
        TypeDescriptor::new("demo::Foo").with_constructor(vec![
            ParamDescriptor::new("first", TypeRef::named("String")),
            ParamDescriptor::new("second", TypeRef::named("String")),
        ]),
    );

    // 同元数的两个重载, 字面量对两者都可转换
    registry.register(
        TypeDescriptor::new("demo::Widget")
            .with_constructor(vec![ParamDescriptor::new("text", TypeRef::named("String"))])
            .with_constructor(vec![ParamDescriptor::new("count", TypeRef::named("i32"))]),
    );

    registry.register(TypeDescriptor::new("demo::Endpoint").with_constructor(vec![
        ParamDescriptor::new("host", TypeRef::named("String")),
        ParamDescriptor::new("port", TypeRef::named("i32")),
    ]));

    registry.register(
        TypeDescriptor::new("demo::Broadcast").with_constructor(vec![ParamDescriptor::new(
            "targets",
            TypeRef::array(TypeRef::named("demo::Logger")),
        )]),
    );

    registry.register(
        TypeDescriptor::new("demo::Repository")
            .with_generic_parameter("T")
            .with_constructor(vec![ParamDescriptor::new(
                "source",
                TypeRef::generic("T"),
            )]),
    );

    registry.register(TypeDescriptor::new("demo::LoggingInterceptor"));
    registry.register(TypeDescriptor::new("demo::TracingBehavior"));
    registry.register(TypeDescriptor::new("demo::Auditable"));
    registry.register(
        TypeDescriptor::new("demo::NameMatchingRule").with_constructor(vec![ParamDescriptor::new(
            "pattern",
            TypeRef::named("String"),
        )]),
    );
    registry.register(TypeDescriptor::new("demo::RetryHandler").with_constructor(vec![]));

    registry
}

/// 构建默认转换器注册表
pub fn demo_converters() -> ValueConverterRegistry {
    ValueConverterRegistry::with_defaults()
}
