//! # 示例应用程序
//!
//! 演示如何使用 Rong DI 声明式配置子系统:
//! 注册类型元数据, 加载注册文件, 把配置翻译为容器注册指令

use anyhow::Context;
use clap::Parser;
use container_abstractions::InMemoryRegistry;
use container_common::{
    set_global_type_registry, ParamDescriptor, TypeDescriptor, TypeRef, TypeRegistry,
    ValueConverterRegistry,
};
use container_config::SectionLoader;
use std::sync::Arc;
use tracing::info;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "Rong DI 配置子系统示例应用")]
struct Args {
    /// 注册配置文件路径
    #[arg(short, long, default_value = "example-app/config/registrations.toml")]
    config: String,

    /// 要应用的容器名称（空字符串表示默认容器）
    #[arg(long, default_value = "")]
    container: String,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(args.log_level.as_str())
        .init();

    info!("启动 Rong DI 示例应用");

    // 注册演示域的类型元数据
    let types = Arc::new(build_type_registry());
    set_global_type_registry(types.clone());
    let converters = ValueConverterRegistry::with_defaults();

    // 加载注册配置文件
    let section = SectionLoader::from_file(&args.config)
        .with_context(|| format!("无法加载注册配置文件: {}", args.config))?;
    info!(
        "加载配置节完成: {} 个容器, {} 条别名",
        section.containers.len(),
        section.aliases.len()
    );

    // 将配置翻译为注册指令
    let mut registry = InMemoryRegistry::new();
    section
        .configure_named(&mut registry, &types, &converters, &args.container)
        .with_context(|| format!("容器 {:?} 配置失败", args.container))?;

    print_registrations(&registry);
    Ok(())
}

/// 构建演示域的类型注册表
fn build_type_registry() -> TypeRegistry {
    let registry = TypeRegistry::new();

    registry.register(TypeDescriptor::new("demo::Logger"));
    registry.register(
        TypeDescriptor::new("demo::ConsoleLogger")
            .with_assignable_to("demo::Logger")
            .with_constructor(vec![ParamDescriptor::new("level", TypeRef::named("String"))]),
    );
    registry.register(
        TypeDescriptor::new("demo::OrderService")
            .with_constructor(vec![
                ParamDescriptor::new("logger", TypeRef::named("demo::Logger")),
                ParamDescriptor::new("retries", TypeRef::named("i32")),
            ])
            .with_property("Endpoint", TypeRef::named("String")),
    );

    registry
}

/// 打印注册表收到的全部注册指令
fn print_registrations(registry: &InMemoryRegistry) {
    for registration in registry.type_registrations() {
        println!(
            "注册: {} -> {} (名称: {:?}, 生命周期: {})",
            registration.from, registration.to, registration.name, registration.lifetime
        );
        for member in &registration.members {
            println!("  成员指令: {:?}", member);
        }
    }
    for instance in registry.instance_registrations() {
        println!(
            "实例: {} (名称: {:?}) = {:?}",
            instance.instance_type, instance.name, instance.value
        );
    }
}
